//! The paragraph-to-record parsing pipeline.
//!
//! Paragraphs flow one way: normalize → segment → structural parsers → the
//! output tree. The segmenter holds at most one block of lookahead; nothing
//! ever revisits a paragraph.

pub mod guides;
pub mod markup;
pub mod normalize;
pub mod question;
pub mod segment;

use thiserror::Error;

use crate::models::{Document, Packet};
use segment::Segmenter;

/// In-text token separating the power clue segment from the remainder.
pub const POWER_MARKER: &str = "(*)";

/// Fatal structural violations. Any of these aborts the whole document: the
/// packet breaks the format's assumptions in a way no local repair can fix.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed question number in {0:?}")]
    Number(String),
    #[error("pronunciation guide {gloss:?} glosses {expected} word(s) but only {found} precede it")]
    GuideContext {
        gloss: String,
        expected: usize,
        found: usize,
    },
    #[error("more than one power marker in clue {0:?}")]
    PowerMarkers(String),
}

/// Parse a whole packet document into the output tree.
pub fn parse_packet(doc: &Document) -> Result<Packet, ParseError> {
    let doc = normalize::normalize(doc);
    let mut segmenter = Segmenter::new();
    for pg in doc.paragraphs() {
        segmenter.push(pg)?;
    }
    Ok(segmenter.finish())
}
