pub mod document;
pub mod packet;

pub use document::{Document, Paragraph, Run};
pub use packet::{AnswerLine, Bonus, BonusSection, Clue, GuideMap, Packet, Tossup};
