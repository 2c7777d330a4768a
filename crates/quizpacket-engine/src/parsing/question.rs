use std::sync::LazyLock;

use regex::Regex;

use super::{
    POWER_MARKER, ParseError, guides,
    markup::{self, TagSet},
};
use crate::models::{AnswerLine, Bonus, BonusSection, Clue, Paragraph, Tossup};

/// Leading "answer:" label on an answer line, any casing.
static ANSWER_LABEL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^answer:\s*").unwrap());

/// Fixed per-part point label on bonus parts.
const PART_LABEL: &str = "[10]";

/// Parse a tossup block: clue paragraph, answer line, optional tag line.
///
/// The segmenter guarantees 2 or 3 paragraphs before dispatching here.
pub fn parse_tossup(block: &[Paragraph]) -> Result<Tossup, ParseError> {
    debug_assert!(block.len() == 2 || block.len() == 3);

    let annotated = markup::annotated(block[0].runs(), TagSet::Italic);
    let clean = markup::clean(block[0].runs());

    let (number, annotated_body) = split_number(&annotated)?;
    // The clean variant drops its leading number independently. Tags contain
    // no periods, so both splits land on the same one.
    let clean_body = clean.split_once('.').map(|(_, rest)| rest).unwrap_or("");

    let (power, non_power) = split_power(annotated_body)?;
    let clue_guides = guides::extract(clean_body)?;

    let tags = match block.get(2) {
        Some(pg) => parse_tag_line(pg),
        None => vec![],
    };

    Ok(Tossup {
        number,
        clue: Clue {
            power,
            non_power,
            clean: clue_guides.clean.trim().to_string(),
        },
        guides: clue_guides.map,
        answer: parse_answer_line(&block[1]),
        tags,
    })
}

/// Parse a bonus block: intro, three clue/answer pairs, optional tag line.
///
/// The segmenter guarantees 7 or 8 paragraphs before dispatching here.
pub fn parse_bonus(block: &[Paragraph]) -> Result<Bonus, ParseError> {
    debug_assert!(block.len() == 7 || block.len() == 8);

    let intro_text = markup::annotated_joined(block[0].runs(), TagSet::Italic);
    let (number, intro) = split_number(&intro_text)?;

    let sections = block[1..7]
        .chunks(2)
        .map(|pair| parse_bonus_section(&pair[0], &pair[1]))
        .collect();

    // Guides may gloss words anywhere in the bonus; match them once over the
    // intro and all three clue paragraphs, whitespace-normalized.
    let substrate = [0usize, 1, 3, 5]
        .iter()
        .map(|&i| markup::clean(block[i].runs()))
        .collect::<Vec<_>>()
        .join(" ");
    let substrate = substrate.split_whitespace().collect::<Vec<_>>().join(" ");
    let bonus_guides = guides::extract(&substrate)?;

    let tags = match block.get(7) {
        Some(pg) => parse_tag_line(pg),
        None => vec![],
    };

    Ok(Bonus {
        number,
        intro: intro.trim().to_string(),
        sections,
        guides: bonus_guides.map,
        tags,
    })
}

/// One ten-point part: a clue paragraph plus its answer line.
fn parse_bonus_section(clue_pg: &Paragraph, answer_pg: &Paragraph) -> BonusSection {
    let text = markup::annotated_joined(clue_pg.runs(), TagSet::Italic);
    let text = text.trim();
    let clue = text.strip_prefix(PART_LABEL).map(str::trim).unwrap_or(text);
    BonusSection {
        clue: clue.to_string(),
        answer: parse_answer_line(answer_pg),
    }
}

/// Parse an answer paragraph into main text and bracketed comments.
///
/// Answer-line runs may split words, so the markup tags land at run
/// boundaries wherever they fall. Everything after the first `[` belongs to
/// the comments, later `[` characters included.
pub fn parse_answer_line(pg: &Paragraph) -> AnswerLine {
    let annotated = markup::annotated(pg.runs(), TagSet::Full);
    let (main, comments) = match annotated.split_once('[') {
        Some((main, rest)) => {
            let rest = rest.trim();
            (main, rest.strip_suffix(']').unwrap_or(rest))
        }
        None => (annotated.as_str(), ""),
    };
    AnswerLine {
        main: ANSWER_LABEL.replace(main.trim(), "").trim().to_string(),
        comments: comments.trim().to_string(),
    }
}

/// Parse a tag paragraph: `<A, B, C>` becomes `["A", "B", "C"]`; a bare line
/// is kept whole as a single tag rather than discarded.
pub fn parse_tag_line(pg: &Paragraph) -> Vec<String> {
    let text = pg.text();
    let text = text.trim();
    match text.strip_prefix('<').and_then(|t| t.strip_suffix('>')) {
        Some(inner) => inner.split(',').map(|tag| tag.trim().to_string()).collect(),
        None => vec![text.to_string()],
    }
}

/// Split `"12. Clue text..."` into the question number and the body after
/// the first period. Later periods stay in the body.
fn split_number(text: &str) -> Result<(u32, &str), ParseError> {
    let (head, body) = text
        .split_once('.')
        .ok_or_else(|| ParseError::Number(text.to_string()))?;
    let number = head
        .trim()
        .parse()
        .map_err(|_| ParseError::Number(head.trim().to_string()))?;
    Ok((number, body))
}

/// Split the clue body on the power marker: `(power, non_power)`, with the
/// power empty when the clue has no marker. More than one marker is fatal.
fn split_power(body: &str) -> Result<(String, String), ParseError> {
    let mut pieces = body.split(POWER_MARKER);
    let first = pieces.next().unwrap_or("");
    match pieces.next() {
        Some(rest) => {
            if pieces.next().is_some() {
                return Err(ParseError::PowerMarkers(body.to_string()));
            }
            Ok((first.trim().to_string(), rest.trim().to_string()))
        }
        None => Ok((String::new(), first.trim().to_string())),
    }
}
