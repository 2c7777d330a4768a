use super::{ParseError, question};
use crate::models::{Packet, Paragraph};

/// Which packet section the scan is currently inside.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Section {
    /// Front matter before the first section marker; paragraphs are ignored.
    Header,
    Tossups,
    Bonuses,
}

/// Groups the normalized paragraph stream into blank-line-delimited blocks
/// and dispatches each to the matching structural parser.
///
/// Driven as a fold: `push` per paragraph, then `finish`. The buffer is the
/// only lookahead; paragraphs are never revisited.
pub struct Segmenter {
    section: Section,
    buffer: Vec<Paragraph>,
    out: Packet,
}

impl Segmenter {
    pub fn new() -> Self {
        Self {
            section: Section::Header,
            buffer: vec![],
            out: Packet::default(),
        }
    }

    pub fn push(&mut self, pg: &Paragraph) -> Result<(), ParseError> {
        let heading = pg.text().trim().to_lowercase();
        if heading.contains("tossups") {
            self.enter(Section::Tossups);
            return Ok(());
        }
        if heading.contains("bonuses") {
            self.enter(Section::Bonuses);
            return Ok(());
        }
        match self.section {
            Section::Header => Ok(()),
            _ if heading.is_empty() => self.flush(),
            _ => {
                self.buffer.push(pg.clone());
                Ok(())
            }
        }
    }

    /// Close out the stream. A still-open block saw no terminating blank
    /// paragraph and is dropped.
    pub fn finish(mut self) -> Packet {
        if !self.buffer.is_empty() {
            log::debug!(
                "dropping {} unterminated trailing paragraph(s)",
                self.buffer.len()
            );
            self.buffer.clear();
        }
        self.out
    }

    fn enter(&mut self, section: Section) {
        self.section = section;
        self.buffer.clear();
    }

    fn flush(&mut self) -> Result<(), ParseError> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let block = std::mem::take(&mut self.buffer);
        match (self.section, block.len()) {
            (Section::Tossups, 2..=3) => {
                self.out.tossups.push(question::parse_tossup(&block)?);
            }
            (Section::Bonuses, 7..=8) => {
                self.out.bonuses.push(question::parse_bonus(&block)?);
            }
            (section, len) => {
                log::warn!(
                    "skipping malformed {section:?} block of {len} paragraph(s) starting {:?}",
                    block[0].text()
                );
            }
        }
        Ok(())
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}
