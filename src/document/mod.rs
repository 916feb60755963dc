pub mod docx;
pub mod pdf;
pub mod text;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use log::{debug, info};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "docx", "txt", "md"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// 1-based page number.
    pub page: u32,
    pub content: String,
}

#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    pub max_pages: Option<usize>,
    /// 1-based page numbers to leave out.
    pub skip_pages: Vec<u32>,
}

pub fn is_supported(path: &Path) -> bool {
    extension(path).is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|s| s.to_str())
        .map(str::to_ascii_lowercase)
}

/// Collapse whitespace, join hyphenated line breaks and strip markup tags.
pub fn clean_text(text: &str) -> String {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    static HYPHEN_BREAK: OnceLock<Regex> = OnceLock::new();
    static TAG: OnceLock<Regex> = OnceLock::new();

    let whitespace = WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"));
    let hyphen_break = HYPHEN_BREAK.get_or_init(|| Regex::new(r"-\s+").expect("valid regex"));
    let tag = TAG.get_or_init(|| Regex::new(r"<[^>]+>").expect("valid regex"));

    let text = whitespace.replace_all(text, " ");
    let text = hyphen_break.replace_all(&text, "");
    let text = tag.replace_all(&text, "");
    text.trim().to_string()
}

/// Raw per-page text in page order, then limited, filtered and cleaned.
pub fn process_document(path: &Path, options: &ExtractOptions) -> Result<Vec<Page>> {
    let raw_pages = match extension(path).as_deref() {
        Some("pdf") => pdf::extract(path)?,
        Some("docx") => docx::extract(path)?,
        Some("txt") | Some("md") => text::extract(path)?,
        _ => return Err(Error::UnsupportedFormat(path.to_path_buf())),
    };
    Ok(select_pages(raw_pages, options))
}

pub(crate) fn select_pages(raw_pages: Vec<String>, options: &ExtractOptions) -> Vec<Page> {
    let total = options
        .max_pages
        .map_or(raw_pages.len(), |max| max.min(raw_pages.len()));
    let mut pages = Vec::with_capacity(total);

    for (index, raw) in raw_pages.into_iter().take(total).enumerate() {
        let page = index as u32 + 1;
        if options.skip_pages.contains(&page) {
            info!("skip page {}", page);
            continue;
        }
        let content = clean_text(&raw);
        debug!("page {}/{}: {} chars", page, total, content.chars().count());
        pages.push(Page { page, content });
    }
    pages
}

/// Extracted pages of one document, the text source for analysis and
/// content commands.
#[derive(Debug, Clone, Default)]
pub struct DocumentContext {
    pub source: PathBuf,
    pub pages: Vec<Page>,
}

impl DocumentContext {
    pub fn new(source: PathBuf, pages: Vec<Page>) -> Self {
        Self { source, pages }
    }

    pub fn open(path: &Path, options: &ExtractOptions) -> Result<Self> {
        let pages = process_document(path, options)?;
        info!("{}: {} pages extracted", path.display(), pages.len());
        Ok(Self::new(path.to_path_buf(), pages))
    }

    pub fn name(&self) -> String {
        self.source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// All page contents joined by spaces.
    pub fn full_text(&self) -> String {
        self.pages
            .iter()
            .map(|p| p.content.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn render_all(&self) -> String {
        self.pages
            .iter()
            .map(render)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn render_page(&self, page: u32) -> String {
        match self.pages.iter().find(|p| p.page == page) {
            Some(p) => render(p),
            None => format!("Page {} not found in the PDF.", page),
        }
    }
}

fn render(page: &Page) -> String {
    format!("[Page {}]: {}", page.page, page.content)
}
