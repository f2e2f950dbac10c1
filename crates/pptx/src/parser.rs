//! PPTX file parser implementation.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use slidequiz_core::{Deck, Error, Result, Slide};
use std::io::{Read, Seek};
use zip::ZipArchive;

/// Placeholder types that mark a shape as the slide title.
const TITLE_PLACEHOLDERS: &[&[u8]] = &[b"title", b"ctrTitle"];

/// Bullet glyphs removed from the start of content lines.
const BULLET_CHARS: &[char] = &['•', '·', '∙', '◦', '▪', '▫', '-'];

/// Lines (and untagged titles) must be longer than this many characters.
const MIN_TEXT_CHARS: usize = 3;

/// Parser for PPTX (Office Open XML) files.
pub struct PptxParser;

impl PptxParser {
    /// Create a new PPTX parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse a PPTX file from a reader into a deck.
    pub fn parse<R: Read + Seek>(&self, reader: R, filename: &str) -> Result<Deck> {
        let mut archive =
            ZipArchive::new(reader).map_err(|e| Error::ZipError(format!("Failed to open ZIP: {}", e)))?;

        let mut deck = Deck::with_source(filename);

        let slide_order = self.get_slide_order(&mut archive)?;
        if slide_order.is_empty() {
            return Err(Error::PptxParseError(
                "presentation contains no slides".to_string(),
            ));
        }

        for slide_path in &slide_order {
            match self.parse_slide(&mut archive, slide_path)? {
                Some(slide) => deck.add_slide(slide),
                None => log::debug!("Skipping slide without text: {}", slide_path),
            }
        }

        log::debug!("Read {} slides from {}", deck.slides.len(), filename);

        Ok(deck)
    }

    /// Get the ordered list of slide paths from the presentation relationships.
    fn get_slide_order<R: Read + Seek>(&self, archive: &mut ZipArchive<R>) -> Result<Vec<String>> {
        let rels_path = "ppt/_rels/presentation.xml.rels";

        let rels_content = self.read_file_from_archive(archive, rels_path)?;
        let mut slides: Vec<(String, Option<usize>)> = Vec::new();

        let mut reader = Reader::from_str(&rels_content);
        reader.trim_text(true);

        loop {
            match reader.read_event() {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) if e.name().as_ref() == b"Relationship" => {
                    let mut rel_type = String::new();
                    let mut target = String::new();

                    for attr in e.attributes().flatten() {
                        match attr.key.as_ref() {
                            b"Type" => rel_type = String::from_utf8_lossy(&attr.value).to_string(),
                            b"Target" => target = String::from_utf8_lossy(&attr.value).to_string(),
                            _ => {}
                        }
                    }

                    if rel_type.ends_with("/slide") {
                        let order_num = extract_slide_number(&target);
                        let full_path = match target.strip_prefix('/') {
                            Some(absolute) => absolute.to_string(),
                            None => format!("ppt/{}", target),
                        };
                        slides.push((full_path, order_num));
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::XmlError(format!(
                        "Error parsing relationships: {}",
                        e
                    )));
                }
                _ => {}
            }
        }

        slides.sort_by(|a, b| match (a.1, b.1) {
            (Some(na), Some(nb)) => na.cmp(&nb),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.0.cmp(&b.0),
        });

        Ok(slides.into_iter().map(|(path, _)| path).collect())
    }

    /// Parse a single slide from the archive. Returns `None` for slides with
    /// neither a title nor content.
    fn parse_slide<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        slide_path: &str,
    ) -> Result<Option<Slide>> {
        let content = self.read_file_from_archive(archive, slide_path)?;
        let shapes = self.extract_shapes_from_xml(&content);
        Ok(build_slide(shapes))
    }

    /// Extract shapes with text, position and title flag from slide XML.
    fn extract_shapes_from_xml(&self, xml_content: &str) -> Vec<ShapeInfo> {
        let mut shapes = Vec::new();
        let mut reader = Reader::from_str(xml_content);
        reader.trim_text(false);

        let mut current_shape: Option<ShapeInfo> = None;
        let mut in_paragraph = false;
        let mut in_run_text = false;
        let mut current_text = String::new();

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => match local_name(e.name().as_ref()) {
                    b"sp" => current_shape = Some(ShapeInfo::default()),
                    b"off" => apply_offset(current_shape.as_mut(), e),
                    b"ph" => apply_placeholder(current_shape.as_mut(), e),
                    b"p" if current_shape.is_some() => {
                        in_paragraph = true;
                        if !current_text.is_empty() {
                            current_text.push('\n');
                        }
                    }
                    b"t" if in_paragraph => in_run_text = true,
                    _ => {}
                },
                Ok(Event::Empty(ref e)) => match local_name(e.name().as_ref()) {
                    b"off" => apply_offset(current_shape.as_mut(), e),
                    b"ph" => apply_placeholder(current_shape.as_mut(), e),
                    b"br" if in_paragraph => current_text.push('\n'),
                    _ => {}
                },
                Ok(Event::Text(ref e)) => {
                    if in_run_text {
                        let text = e.unescape().unwrap_or_default();
                        current_text.push_str(&text);
                    }
                }
                Ok(Event::End(ref e)) => match local_name(e.name().as_ref()) {
                    b"sp" => {
                        if let Some(mut shape) = current_shape.take() {
                            shape.text = current_text.trim().to_string();
                            if !shape.text.is_empty() {
                                shapes.push(shape);
                            }
                        }
                        current_text.clear();
                        in_paragraph = false;
                        in_run_text = false;
                    }
                    b"p" => in_paragraph = false,
                    b"t" => in_run_text = false,
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    log::warn!("XML parsing error (continuing): {}", e);
                    break;
                }
                _ => {}
            }
        }

        shapes
    }

    /// Read a file from the ZIP archive.
    fn read_file_from_archive<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        path: &str,
    ) -> Result<String> {
        let mut file = archive
            .by_name(path)
            .map_err(|e| Error::ZipError(format!("File not found in archive '{}': {}", path, e)))?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| Error::CorruptedFile(format!("Failed to read '{}': {}", path, e)))?;

        Ok(content)
    }
}

impl Default for PptxParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Information about a shape extracted from XML.
#[derive(Debug, Default, Clone, PartialEq)]
struct ShapeInfo {
    text: String,
    x: f64,
    y: f64,
    is_title: bool,
}

/// Record the `x`/`y` attributes of an `a:off` element on the current shape.
fn apply_offset(shape: Option<&mut ShapeInfo>, e: &BytesStart) {
    let Some(shape) = shape else { return };
    for attr in e.attributes().flatten() {
        let value = String::from_utf8_lossy(&attr.value);
        match attr.key.as_ref() {
            b"x" => shape.x = value.parse().unwrap_or(shape.x),
            b"y" => shape.y = value.parse().unwrap_or(shape.y),
            _ => {}
        }
    }
}

/// Flag the current shape as the title if its placeholder type says so.
fn apply_placeholder(shape: Option<&mut ShapeInfo>, e: &BytesStart) {
    let Some(shape) = shape else { return };
    let is_title = e
        .attributes()
        .flatten()
        .any(|attr| attr.key.as_ref() == b"type" && TITLE_PLACEHOLDERS.contains(&attr.value.as_ref()));
    if is_title {
        shape.is_title = true;
    }
}

/// Turn positioned shapes into a slide: the title placeholder (or first
/// substantial text) becomes the title, every other paragraph a content line.
fn build_slide(mut shapes: Vec<ShapeInfo>) -> Option<Slide> {
    shapes.sort_by(|a, b| {
        a.y.partial_cmp(&b.y)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal))
    });

    let title_index = shapes
        .iter()
        .position(|s| s.is_title)
        .or_else(|| shapes.iter().position(|s| s.text.chars().count() > MIN_TEXT_CHARS));

    let mut slide = Slide::new();
    for (idx, shape) in shapes.iter().enumerate() {
        if Some(idx) == title_index {
            let title = shape.text.split_whitespace().collect::<Vec<_>>().join(" ");
            slide.title = Some(title);
            continue;
        }

        // Length is measured before the bullet is stripped.
        for line in shape.text.lines().map(str::trim) {
            if line.chars().count() <= MIN_TEXT_CHARS {
                continue;
            }
            let line = line.trim_start_matches(BULLET_CHARS).trim();
            if !line.is_empty() {
                slide.add_line(line);
            }
        }
    }

    if slide.title.is_none() && slide.lines.is_empty() {
        None
    } else {
        Some(slide)
    }
}

/// Extract the local name from a potentially namespaced XML element name.
fn local_name(name: &[u8]) -> &[u8] {
    if let Some(pos) = name.iter().position(|&b| b == b':') {
        &name[pos + 1..]
    } else {
        name
    }
}

/// Extract a slide number from a target like "slides/slide3.xml".
fn extract_slide_number(s: &str) -> Option<usize> {
    let s = s.trim_end_matches(".xml");

    let digits: String = s.chars().rev().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let digits: String = digits.chars().rev().collect();
    digits.parse().ok()
}
