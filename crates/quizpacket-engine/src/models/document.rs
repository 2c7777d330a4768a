/// A contiguous span of identically formatted text inside a paragraph.
///
/// Runs come straight out of the source document and are never mutated;
/// normalization synthesizes fresh runs by slicing `text` and copying the
/// formatting flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl Run {
    pub fn new(text: impl Into<String>, bold: bool, italic: bool, underline: bool) -> Self {
        Self {
            text: text.into(),
            bold,
            italic,
            underline,
        }
    }

    /// A run with no character formatting.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, false, false, false)
    }
}

/// An ordered sequence of runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    runs: Vec<Run>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_runs(runs: Vec<Run>) -> Self {
        Self { runs }
    }

    pub fn push_run(&mut self, run: Run) {
        self.runs.push(run);
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Concatenation of all run texts.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

impl From<Vec<Run>> for Paragraph {
    fn from(runs: Vec<Run>) -> Self {
        Self::from_runs(runs)
    }
}

/// The in-memory document: an ordered sequence of paragraphs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    paragraphs: Vec<Paragraph>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_paragraphs(paragraphs: Vec<Paragraph>) -> Self {
        Self { paragraphs }
    }

    pub fn push_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }
}
