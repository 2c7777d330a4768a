use std::sync::LazyLock;

use regex::Regex;

use super::{POWER_MARKER, ParseError};
use crate::models::GuideMap;

/// A parenthesized, double-quoted gloss. Straight or directional quotes are
/// accepted on either side; the content may not contain an opening
/// parenthesis.
static GUIDE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\(["\u{201C}\u{201D}][^(]*["\u{201C}\u{201D}]\)"#).unwrap()
});

/// Guides extracted from a clue, along with the text they were removed from.
#[derive(Debug, Default, PartialEq)]
pub struct Guides {
    pub map: GuideMap,
    pub clean: String,
}

/// Find every pronunciation guide in `text`, associate each with the word
/// span it glosses, and strip the annotations out.
///
/// A gloss of `n` words describes the `n` words immediately before it; fewer
/// than `n` preceding words means the source is malformed and the parse
/// aborts. Matching runs against a copy with the power marker removed, so a
/// guide straddling the power boundary still sees a contiguous word window;
/// the returned `clean` text is the original input minus the guides, marker
/// untouched.
pub fn extract(text: &str) -> Result<Guides, ParseError> {
    let unmarked = text.replace(POWER_MARKER, "");
    let mut map = GuideMap::new();
    for m in GUIDE.find_iter(&unmarked) {
        let gloss = strip_delimiters(m.as_str());
        let expected = gloss.split_whitespace().count();
        let preceding: Vec<&str> = unmarked[..m.start()].split_whitespace().collect();
        if preceding.len() < expected {
            return Err(ParseError::GuideContext {
                gloss: gloss.to_string(),
                expected,
                found: preceding.len(),
            });
        }
        let span = preceding[preceding.len() - expected..].join(" ");
        map.insert(span, gloss.to_string());
    }
    let clean = GUIDE.replace_all(text, "").into_owned();
    Ok(Guides { map, clean })
}

/// Drop the two-character open and close delimiters around a matched guide.
/// Character-wise, not byte-wise: directional quotes are multi-byte.
fn strip_delimiters(matched: &str) -> &str {
    let mut chars = matched.chars();
    chars.next();
    chars.next();
    chars.next_back();
    chars.next_back();
    chars.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn text_without_guides_round_trips() {
        let text = "He wrote Pride and Prejudice.";
        let guides = extract(text).unwrap();
        assert_eq!(guides.clean, text);
        assert!(guides.map.is_empty());
    }

    #[test]
    fn guide_attaches_to_preceding_word() {
        let guides = extract("He wrote Pride (\"PRYD\") and Prejudice.").unwrap();
        assert_eq!(guides.map.get("Pride").map(String::as_str), Some("PRYD"));
        assert_eq!(guides.clean, "He wrote Pride  and Prejudice.");
    }

    #[test]
    fn multi_word_gloss_takes_matching_span() {
        let guides = extract("the Eyjafjallajokull volcano (\"AY-yah-fyah-lah-YOH-kuul vol-KAY-no\") erupted").unwrap();
        assert_eq!(
            guides.map.get("Eyjafjallajokull volcano").map(String::as_str),
            Some("AY-yah-fyah-lah-YOH-kuul vol-KAY-no")
        );
    }

    #[test]
    fn key_word_count_matches_gloss_word_count() {
        let guides =
            extract("one two three (\"a b\") four five (\"c\") six").unwrap();
        for (span, gloss) in &guides.map {
            assert_eq!(
                span.split_whitespace().count(),
                gloss.split_whitespace().count()
            );
        }
        assert_eq!(guides.map.len(), 2);
    }

    #[test]
    fn directional_quotes_match() {
        let guides = extract("named Goethe (\u{201C}GER-tuh\u{201D}) wrote").unwrap();
        assert_eq!(guides.map.get("Goethe").map(String::as_str), Some("GER-tuh"));
    }

    #[test]
    fn guide_straddling_power_marker_still_matches() {
        // The marker splits "Goethe" from its guide; matching ignores it.
        let guides = extract("the author Goethe (*) (\"GER-tuh\") later wrote").unwrap();
        assert_eq!(guides.map.get("Goethe").map(String::as_str), Some("GER-tuh"));
        // The marker survives in the cleaned text.
        assert!(guides.clean.contains("(*)"));
    }

    #[test]
    fn too_few_preceding_words_is_fatal() {
        let err = extract("Goethe (\"GER-tuh two\") wrote").unwrap_err();
        assert!(matches!(
            err,
            ParseError::GuideContext {
                expected: 2,
                found: 1,
                ..
            }
        ));
    }

    #[test]
    fn plain_parenthetical_is_not_a_guide() {
        let text = "This law (named for Ohm) relates voltage and current.";
        let guides = extract(text).unwrap();
        assert!(guides.map.is_empty());
        assert_eq!(guides.clean, text);
    }
}
