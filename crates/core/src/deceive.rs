//! Deceptive acronym expansions.
//!
//! Builds wrong expansions that keep the word count, separators and
//! initials of the real one by swapping words for same-initial terms from
//! a fixed technical vocabulary.

use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Word runs between space/hyphen separators.
static WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\s\-]+").unwrap());

/// Connector words that stay in place.
const CONNECTORS: &[&str] = &[
    "a", "an", "and", "at", "by", "for", "in", "of", "on", "or", "the", "to", "with",
];

/// Appended when an expansion has no word that can be swapped.
const FALLBACK_SUFFIX: &str = "Framework";

const VOCABULARY_ENTRIES: &[(char, &[&str])] = &[
    ('A', &["Advanced", "Application", "Automated", "Access", "Adaptive", "Abstract", "Analytics", "Architecture", "Array", "Asynchronous", "Agent", "Allocation"]),
    ('B', &["Binary", "Base", "Basic", "Block", "Buffer", "Bridge", "Broadcast", "Bus", "Batch", "Boolean", "Backend", "Bandwidth"]),
    ('C', &["Central", "Computer", "Control", "Cache", "Client", "Core", "Cloud", "Channel", "Compiler", "Cluster", "Command", "Configuration"]),
    ('D', &["Data", "Digital", "Dynamic", "Distributed", "Domain", "Device", "Driver", "Direct", "Database", "Deployment", "Descriptor", "Display"]),
    ('E', &["Electronic", "Enterprise", "Embedded", "Extended", "Event", "Engine", "Encryption", "Execution", "External", "Endpoint", "Error", "Environment"]),
    ('F', &["File", "Function", "Frame", "Format", "Flow", "Fast", "Field", "Filter", "Firmware", "Flash", "Framework", "Fragment"]),
    ('G', &["General", "Global", "Graphics", "Gateway", "Generic", "Grid", "Group", "Graph", "Guard", "Generation", "Gradient", "Granular"]),
    ('H', &["Hyper", "High", "Host", "Hardware", "Hybrid", "Hash", "Header", "Heap", "Handler", "Hierarchical", "Hosted", "Heuristic"]),
    ('I', &["Internet", "Integrated", "Interface", "Information", "Input", "Internal", "Instruction", "Index", "Instance", "Interactive", "Intelligent", "Image"]),
    ('J', &["Java", "Job", "Joint", "Journal", "Junction", "Just", "Join", "Jitter", "Jump", "Jacket"]),
    ('K', &["Kernel", "Key", "Knowledge", "Keyboard", "Kinetic", "Kit", "Keyword", "Kilobyte", "Kiosk", "Kubernetes"]),
    ('L', &["Local", "Logical", "Language", "Link", "Layer", "Library", "Linear", "Load", "Logic", "Lightweight", "Latency", "Lookup"]),
    ('M', &["Memory", "Machine", "Management", "Module", "Multi", "Message", "Main", "Media", "Mobile", "Model", "Monitor", "Matrix"]),
    ('N', &["Network", "Node", "Native", "Name", "Numeric", "Neural", "Notification", "Normal", "Nested", "Navigation", "Null", "Number"]),
    ('O', &["Object", "Open", "Operating", "Online", "Output", "Optical", "Operation", "Optimized", "Order", "Orchestration", "Offset", "Overlay"]),
    ('P', &["Protocol", "Program", "Process", "Processing", "Personal", "Platform", "Packet", "Public", "Primary", "Parallel", "Portable", "Pipeline"]),
    ('Q', &["Query", "Queue", "Quality", "Quantum", "Quick", "Quota", "Qualified", "Quantitative", "Quorum", "Quarter"]),
    ('R', &["Random", "Remote", "Resource", "Runtime", "Real", "Register", "Request", "Router", "Relational", "Reliable", "Rendering", "Repository"]),
    ('S', &["System", "Software", "Service", "Storage", "Secure", "Server", "Structured", "Standard", "Signal", "Stack", "Session", "Synchronous"]),
    ('T', &["Transfer", "Transmission", "Technology", "Terminal", "Text", "Thread", "Token", "Transport", "Time", "Type", "Table", "Trusted"]),
    ('U', &["Universal", "Unit", "User", "Unified", "Uniform", "Utility", "Update", "Upload", "Unicode", "Unstructured", "Usage", "Upstream"]),
    ('V', &["Virtual", "Visual", "Variable", "Vector", "Version", "Video", "Volume", "Validation", "Value", "Vendor", "Verified", "Viewport"]),
    ('W', &["Web", "Wide", "Wireless", "Window", "Workflow", "Worker", "Word", "Write", "Widget", "Workspace", "Wrapper", "Watch"]),
    ('X', &["Xenon", "Xpath", "Xfer", "Xeon", "Xml", "Xserver", "Xcode", "Xpress", "Xterm", "Xchange", "Xtended"]),
    ('Y', &["Yield", "Yottabyte", "Yet", "Yarn", "Yaml", "Year", "Young", "Yellow", "Yoke", "Yard"]),
    ('Z', &["Zero", "Zone", "Zip", "Zoom", "Zonal", "Zettabyte", "Zigzag", "Zen", "Zenith", "Zombie"]),
];

/// Candidate replacement terms keyed by uppercase first letter.
static VOCABULARY: LazyLock<HashMap<char, &'static [&'static str]>> =
    LazyLock::new(|| VOCABULARY_ENTRIES.iter().copied().collect());

/// Look up the replacement bucket for the initial of `word`.
pub fn vocabulary_for(word: &str) -> Option<&'static [&'static str]> {
    let initial = word.chars().next()?.to_ascii_uppercase();
    VOCABULARY.get(&initial).copied()
}

fn is_swappable(word: &str) -> bool {
    let lowered = word.to_lowercase();
    !CONNECTORS.contains(&lowered.as_str()) && vocabulary_for(word).is_some()
}

/// Fabricate a plausible but wrong expansion from `expansion`.
///
/// A coin flip decides between replacing every swappable word and replacing
/// one randomly chosen swappable word. The result never equals `expansion`
/// case-insensitively.
pub fn deceive<R: Rng + ?Sized>(expansion: &str, rng: &mut R) -> String {
    let words: Vec<regex::Match> = WORD_REGEX.find_iter(expansion).collect();
    let swappable: Vec<usize> = words
        .iter()
        .enumerate()
        .filter(|(_, m)| is_swappable(m.as_str()))
        .map(|(i, _)| i)
        .collect();

    if swappable.is_empty() {
        let base = expansion.trim();
        return if base.is_empty() {
            FALLBACK_SUFFIX.to_string()
        } else {
            format!("{} {}", base, FALLBACK_SUFFIX)
        };
    }

    let replace_all = rng.gen_bool(0.5);
    let chosen: Vec<usize> = if replace_all {
        swappable
    } else {
        swappable.choose(rng).copied().into_iter().collect()
    };

    let mut output = String::with_capacity(expansion.len() + 16);
    let mut last_end = 0;
    for (i, m) in words.iter().enumerate() {
        output.push_str(&expansion[last_end..m.start()]);
        if chosen.contains(&i) {
            output.push_str(&substitute(m.as_str(), rng));
        } else {
            output.push_str(m.as_str());
        }
        last_end = m.end();
    }
    output.push_str(&expansion[last_end..]);

    output
}

/// Pick a same-initial term for `word`, redrawing once on a match and then
/// taking the first differing entry.
fn substitute<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let Some(bucket) = vocabulary_for(word) else {
        return word.to_string();
    };

    let mut pick = bucket.choose(rng).copied().unwrap_or(word);
    if pick.eq_ignore_ascii_case(word) {
        pick = bucket.choose(rng).copied().unwrap_or(word);
    }
    if pick.eq_ignore_ascii_case(word) {
        pick = bucket
            .iter()
            .copied()
            .find(|c| !c.eq_ignore_ascii_case(word))
            .unwrap_or(word);
    }

    match_case(pick, word)
}

/// Render `term` in the letter case style of `original`.
fn match_case(term: &str, original: &str) -> String {
    let has_letters = original.chars().any(char::is_alphabetic);
    let all_caps = original
        .chars()
        .filter(|c| c.is_alphabetic())
        .all(char::is_uppercase);
    if has_letters && all_caps && original.chars().count() > 1 {
        term.to_uppercase()
    } else if original.chars().next().is_some_and(char::is_lowercase) {
        term.to_lowercase()
    } else {
        term.to_string()
    }
}
