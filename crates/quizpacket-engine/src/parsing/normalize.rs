use crate::models::{Document, Paragraph, Run};

/// Rewrite the paragraph stream so no paragraph's text contains a line break.
///
/// A run holding `k` breaks splits into `k + 1` pieces, each carrying the
/// original run's formatting flags; every break starts a new output
/// paragraph. Runs without breaks copy through unchanged, paragraph order is
/// preserved, and paragraphs that end up empty are kept — the segmenter
/// relies on them as block boundaries. Idempotent.
pub fn normalize(doc: &Document) -> Document {
    let mut out = Document::new();
    for pg in doc.paragraphs() {
        let mut current = Paragraph::new();
        for run in pg.runs() {
            let mut pieces = run.text.split('\n');
            // First piece extends the paragraph in progress.
            if let Some(first) = pieces.next()
                && !first.is_empty()
            {
                current.push_run(run_with_text(run, first));
            }
            for piece in pieces {
                out.push_paragraph(std::mem::take(&mut current));
                if !piece.is_empty() {
                    current.push_run(run_with_text(run, piece));
                }
            }
        }
        out.push_paragraph(current);
    }
    out
}

fn run_with_text(run: &Run, text: &str) -> Run {
    Run::new(text, run.bold, run.italic, run.underline)
}
