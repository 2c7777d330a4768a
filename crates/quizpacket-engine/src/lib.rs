pub mod io;
pub mod models;
pub mod parsing;

// Re-export key types for easier usage
pub use models::{
    AnswerLine, Bonus, BonusSection, Clue, Document, GuideMap, Packet, Paragraph, Run, Tossup,
};
pub use parsing::{POWER_MARKER, ParseError, parse_packet};
