//! PPTX (Office Open XML) reader producing decks for question generation.
//!
//! Parses .pptx files, which are ZIP archives of XML documents, into a
//! [`slidequiz_core::Deck`]: one slide per presentation slide, with the
//! title placeholder as the slide title and the remaining paragraphs as
//! raw content lines.

pub mod parser;

pub use parser::PptxParser;
