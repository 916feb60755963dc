use std::fs;
use std::path::Path;

use docx_rs::{read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild};

use crate::error::{Error, Result};

/// DOCX has no fixed pagination, so the body comes back as one page with a
/// line per non-empty paragraph. Cleanup happens in `select_pages`.
pub fn extract(path: &Path) -> Result<Vec<String>> {
    let buffer = fs::read(path).map_err(|source| Error::DocumentIo {
        path: path.to_path_buf(),
        source,
    })?;

    let document = read_docx(&buffer).map_err(|err| Error::Docx {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    let paragraphs: Vec<String> = document
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
            _ => None,
        })
        .filter(|text| !text.trim().is_empty())
        .collect();

    Ok(vec![paragraphs.join("\n")])
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    paragraph
        .children
        .iter()
        .filter_map(|child| match child {
            ParagraphChild::Run(run) => Some(run),
            _ => None,
        })
        .flat_map(|run| run.children.iter())
        .filter_map(|child| match child {
            RunChild::Text(text) => Some(text.text.as_str()),
            _ => None,
        })
        .collect()
}
