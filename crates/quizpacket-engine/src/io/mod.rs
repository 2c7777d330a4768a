use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::models::{Document, Paragraph, Run};

const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Not a docx package: {0}")]
    Package(#[from] zip::result::ZipError),
    #[error("Malformed document XML: {0}")]
    Xml(#[from] roxmltree::Error),
}

/// Read a `.docx` packet and return its paragraph stream.
///
/// Only the main document part is consulted; headers, footers, and styles
/// play no role in the packet format.
pub fn read_docx(path: &Path) -> Result<Document, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let file = File::open(path).map_err(IoError::Io)?;
    let mut archive = zip::ZipArchive::new(file)?;
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")?
        .read_to_string(&mut xml)?;
    parse_document_xml(&xml)
}

/// Parse the main document part of an OOXML package into the paragraph/run
/// model. Each `w:p` becomes a paragraph and each `w:r` a run; run text
/// concatenates `w:t` content with `w:br`/`w:cr` as line breaks and `w:tab`
/// as tabs, so soft line breaks survive for the normalizer to split on.
pub fn parse_document_xml(xml: &str) -> Result<Document, IoError> {
    let tree = roxmltree::Document::parse(xml)?;
    let mut doc = Document::new();
    for p in tree.root().descendants().filter(|n| is_wml(n, "p")) {
        let mut pg = Paragraph::new();
        for r in p.children().filter(|n| is_wml(n, "r")) {
            pg.push_run(parse_run(r));
        }
        doc.push_paragraph(pg);
    }
    Ok(doc)
}

fn parse_run(r: roxmltree::Node) -> Run {
    let rpr = r.children().find(|n| is_wml(n, "rPr"));
    let mut text = String::new();
    for child in r.children() {
        if is_wml(&child, "t") {
            text.push_str(child.text().unwrap_or_default());
        } else if is_wml(&child, "br") || is_wml(&child, "cr") {
            text.push('\n');
        } else if is_wml(&child, "tab") {
            text.push('\t');
        }
    }
    Run {
        text,
        bold: rpr.map(|n| wml_toggle(n, "b")).unwrap_or(false),
        italic: rpr.map(|n| wml_toggle(n, "i")).unwrap_or(false),
        underline: rpr.map(|n| wml_toggle(n, "u")).unwrap_or(false),
    }
}

fn is_wml(node: &roxmltree::Node, name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == name
        && node.tag_name().namespace() == Some(WML_NS)
}

/// A WML toggle property (`w:b`, `w:i`, `w:u`): present means on, unless its
/// `w:val` turns it back off.
fn wml_toggle(rpr: roxmltree::Node, name: &str) -> bool {
    rpr.children()
        .find(|n| is_wml(n, name))
        .map(|n| {
            n.attribute((WML_NS, "val"))
                .is_none_or(|v| v != "0" && v != "false" && v != "none")
        })
        .unwrap_or(false)
}
