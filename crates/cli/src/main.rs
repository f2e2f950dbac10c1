//! CLI tool for generating multiple-choice quizzes from slide decks.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use slidequiz_core::{
    Deck, GeneratorConfig, InputFormat, Question, QuestionGenerator, QuizFormatter, Slide,
};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

/// Generate multiple-choice questions from PowerPoint or JSON slide decks.
#[derive(Parser, Debug)]
#[command(name = "slidequiz")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input deck file(s) (.pptx or .json)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output directory (default: same as input file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print output to stdout instead of writing to file
    #[arg(short, long)]
    print: bool,

    /// Number of questions to generate per deck
    #[arg(short = 'n', long, default_value = "10")]
    count: usize,

    /// Seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Include the answer key in text output
    #[arg(short, long)]
    answers: bool,

    /// Include the source sentence of each question in text output
    #[arg(short, long)]
    explanations: bool,

    /// JSON file with generator settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn extension(&self) -> &'static str {
        match self {
            Self::Text => "quiz.txt",
            Self::Json => "quiz.json",
        }
    }
}

/// A JSON deck is either a full deck object or a bare list of slides.
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum DeckFile {
    Deck(Deck),
    Slides(Vec<Slide>),
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let config = load_config(args.config.as_deref())?;
    let generator = QuestionGenerator::with_config(config);
    let formatter = QuizFormatter::new()
        .with_answers(args.answers)
        .with_explanations(args.explanations);

    for input_path in &args.input {
        if args.verbose {
            eprintln!("Processing: {}", input_path.display());
        }

        match process_file(input_path, &args, &generator, &formatter) {
            Ok(output) => {
                if args.print {
                    print!("{}", output);
                } else {
                    let output_path =
                        get_output_path(input_path, args.output.as_ref(), args.format)?;
                    write_output(&output_path, &output)?;
                    if args.verbose {
                        eprintln!("Written to: {}", output_path.display());
                    }
                }
            }
            Err(e) => {
                eprintln!("Error processing {}: {:#}", input_path.display(), e);
            }
        }
    }

    Ok(())
}

/// Load generator settings, falling back to defaults.
fn load_config(path: Option<&Path>) -> Result<GeneratorConfig> {
    let config = match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        }
        None => GeneratorConfig::default(),
    };

    config.validate()?;
    Ok(config)
}

/// Generate a quiz for a single deck file.
fn process_file(
    input_path: &Path,
    args: &Args,
    generator: &QuestionGenerator,
    formatter: &QuizFormatter,
) -> Result<String> {
    let deck = load_deck(input_path)?;

    if args.verbose {
        eprintln!("  Found {} slides, {} lines", deck.slides.len(), deck.line_count());
    }

    let questions: Vec<Question> = match args.seed {
        Some(seed) => generator.generate_seeded(&deck, args.count, seed),
        None => generator.generate(&deck, args.count, &mut rand::thread_rng()),
    };

    if questions.len() < args.count {
        log::warn!(
            "{}: only {} of {} questions could be generated",
            input_path.display(),
            questions.len(),
            args.count
        );
    }

    let output = match args.format {
        OutputFormat::Text => formatter.format_with_newline(&questions),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&questions)?;
            json.push('\n');
            json
        }
    };

    Ok(output)
}

/// Read a deck from a .pptx or JSON file.
fn load_deck(input_path: &Path) -> Result<Deck> {
    let file = File::open(input_path)
        .with_context(|| format!("Failed to open {}", input_path.display()))?;
    let mut reader = BufReader::new(file);

    // Read magic bytes to detect format
    let mut magic = Vec::with_capacity(8);
    reader
        .by_ref()
        .take(8)
        .read_to_end(&mut magic)
        .with_context(|| "Failed to read file header")?;

    let format = InputFormat::from_magic(&magic)
        .or_else(|| {
            input_path
                .extension()
                .and_then(|e| e.to_str())
                .and_then(InputFormat::from_extension)
        })
        .ok_or_else(|| anyhow::anyhow!("Could not detect file format"))?;

    let filename = input_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown");

    // Re-open file for parsing from the start
    let file = File::open(input_path)?;
    let reader = BufReader::new(file);

    let deck = match format {
        InputFormat::Pptx => {
            log::debug!("Parsing as PPTX");
            slidequiz_pptx::PptxParser::new()
                .parse(reader, filename)
                .map_err(|e| anyhow::anyhow!("{}", e))?
        }
        InputFormat::Json => {
            log::debug!("Parsing as JSON deck");
            let parsed: DeckFile = serde_json::from_reader(reader)
                .map_err(|e| slidequiz_core::Error::InvalidDeck(e.to_string()))?;
            match parsed {
                DeckFile::Deck(mut deck) => {
                    deck.source.get_or_insert_with(|| filename.to_string());
                    deck
                }
                DeckFile::Slides(slides) => {
                    let mut deck = Deck::from(slides);
                    deck.source = Some(filename.to_string());
                    deck
                }
            }
        }
    };

    Ok(deck)
}

/// Determine the output path for a processed file.
fn get_output_path(
    input_path: &Path,
    output_dir: Option<&PathBuf>,
    format: OutputFormat,
) -> Result<PathBuf> {
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let output_filename = format!("{}.{}", stem, format.extension());

    let output_path = match output_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
            dir.join(output_filename)
        }
        None => match input_path.parent() {
            Some(parent) => parent.join(output_filename),
            None => PathBuf::from(output_filename),
        },
    };

    Ok(output_path)
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}
