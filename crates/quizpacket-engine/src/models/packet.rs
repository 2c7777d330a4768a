use std::collections::BTreeMap;

use serde::Serialize;

/// Pronunciation guides keyed by the word span each one glosses.
///
/// Keys serialize in sorted order. Two guides glossing the identical span
/// collide and the later one wins; the format makes that vanishingly rare.
pub type GuideMap = BTreeMap<String, String>;

/// An answer line split into the answer proper and its bracketed comments.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnswerLine {
    pub main: String,
    pub comments: String,
}

/// A tossup clue in its three renderings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Clue {
    /// Annotated text before the power marker; empty when the clue has none.
    pub power: String,
    #[serde(rename = "non-power")]
    pub non_power: String,
    /// Markup-free text with pronunciation guides removed.
    pub clean: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tossup {
    pub number: u32,
    pub clue: Clue,
    pub guides: GuideMap,
    pub answer: AnswerLine,
    pub tags: Vec<String>,
}

/// One ten-point part of a bonus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BonusSection {
    pub clue: String,
    pub answer: AnswerLine,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bonus {
    pub number: u32,
    pub intro: String,
    /// Always exactly three parts.
    pub sections: Vec<BonusSection>,
    pub guides: GuideMap,
    pub tags: Vec<String>,
}

/// The output tree for one parsed packet.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Packet {
    pub tossups: Vec<Tossup>,
    pub bonuses: Vec<Bonus>,
}
