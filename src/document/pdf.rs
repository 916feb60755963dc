use std::path::Path;

use pdf_extract::extract_text_by_pages;

use crate::error::{Error, Result};

pub fn extract(path: &Path) -> Result<Vec<String>> {
    let pages = extract_text_by_pages(path).map_err(|err| Error::Pdf {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    Ok(pages
        .into_iter()
        .map(|page| page.replace(|c: char| c.is_control() && !c.is_whitespace(), ""))
        .collect())
}
