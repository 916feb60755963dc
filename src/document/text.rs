use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

const FORM_FEED: char = '\u{0C}';

/// Plain text; form feeds mark page breaks.
pub fn extract(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| Error::DocumentIo {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content.split(FORM_FEED).map(str::to_string).collect())
}
