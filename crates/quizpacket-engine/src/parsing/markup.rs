use crate::models::Run;

/// Which formatting flags a paragraph kind turns into markup tags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TagSet {
    /// Clue, intro, and bonus-part text: only italics are annotated.
    Italic,
    /// Answer lines: bold, italic, and underline all participate.
    Full,
}

/// Canonical tag name for a formatting-flag triple.
///
/// Names are the single-letter codes joined in the fixed order bold, italic,
/// underline; unformatted text carries no tag.
fn tag_name(bold: bool, italic: bool, underline: bool) -> Option<&'static str> {
    match (bold, italic, underline) {
        (false, false, false) => None,
        (true, false, false) => Some("b"),
        (false, true, false) => Some("i"),
        (false, false, true) => Some("u"),
        (true, true, false) => Some("bi"),
        (true, false, true) => Some("bu"),
        (false, true, true) => Some("iu"),
        (true, true, true) => Some("biu"),
    }
}

fn run_tag(run: &Run, set: TagSet) -> Option<&'static str> {
    match set {
        TagSet::Italic => tag_name(false, run.italic, false),
        TagSet::Full => tag_name(run.bold, run.italic, run.underline),
    }
}

fn wrap(text: &str, tag: Option<&str>) -> String {
    match tag {
        Some(name) => format!("<{name}>{text}<\\{name}>"),
        None => text.to_string(),
    }
}

/// Annotated concatenation of a run sequence.
///
/// Tags sit at run boundaries wherever they fall — runs are not assumed to
/// be whitespace-aligned and may split words.
pub fn annotated(runs: &[Run], set: TagSet) -> String {
    runs.iter().map(|r| wrap(&r.text, run_tag(r, set))).collect()
}

/// Annotated text with each run's text trimmed and runs joined by single
/// spaces: the form for bonus intros and parts, whose source runs are
/// whitespace-delimited.
pub fn annotated_joined(runs: &[Run], set: TagSet) -> String {
    runs.iter()
        .map(|r| wrap(r.text.trim(), run_tag(r, set)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Markup-free concatenation: the substrate for guide matching and word
/// counting. Built from the same runs as [`annotated`], so word boundaries
/// line up modulo the inserted tags.
pub fn clean(runs: &[Run]) -> String {
    runs.iter().map(|r| r.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(true, false, false, "b")]
    #[case(false, true, false, "i")]
    #[case(false, false, true, "u")]
    #[case(true, true, false, "bi")]
    #[case(true, false, true, "bu")]
    #[case(false, true, true, "iu")]
    #[case(true, true, true, "biu")]
    fn tag_names_follow_fixed_flag_order(
        #[case] bold: bool,
        #[case] italic: bool,
        #[case] underline: bool,
        #[case] expected: &str,
    ) {
        assert_eq!(tag_name(bold, italic, underline), Some(expected));
    }

    #[test]
    fn unformatted_text_gets_no_tag() {
        assert_eq!(tag_name(false, false, false), None);
    }

    #[test]
    fn italic_set_ignores_bold_and_underline() {
        let runs = vec![
            Run::plain("He wrote "),
            Run::new("Pride and Prejudice", true, true, true),
            Run::plain("."),
        ];
        assert_eq!(
            annotated(&runs, TagSet::Italic),
            "He wrote <i>Pride and Prejudice<\\i>."
        );
    }

    #[test]
    fn full_set_combines_flags() {
        let runs = vec![
            Run::plain("Answer: "),
            Run::new("Mitochondria", true, false, true),
        ];
        assert_eq!(
            annotated(&runs, TagSet::Full),
            "Answer: <bu>Mitochondria<\\bu>"
        );
    }

    #[test]
    fn tags_land_on_run_boundaries_inside_words() {
        // Word split across runs: the tag pair falls mid-word.
        let runs = vec![Run::plain("Mitoch"), Run::new("ondria", true, false, false)];
        assert_eq!(annotated(&runs, TagSet::Full), "Mitoch<b>ondria<\\b>");
    }

    #[test]
    fn joined_form_trims_each_run() {
        let runs = vec![
            Run::plain("  1. For 10 points each:  "),
            Run::new(" name these novels. ", false, true, false),
        ];
        assert_eq!(
            annotated_joined(&runs, TagSet::Italic),
            "1. For 10 points each: <i>name these novels.<\\i>"
        );
    }

    #[test]
    fn clean_is_plain_concatenation() {
        let runs = vec![
            Run::plain("He wrote "),
            Run::new("Pride and Prejudice", false, true, false),
            Run::plain("."),
        ];
        assert_eq!(clean(&runs), "He wrote Pride and Prejudice.");
    }
}
