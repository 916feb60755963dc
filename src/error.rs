use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot read keyword taxonomy {path}: {source}")]
    TaxonomyIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("keyword taxonomy is not valid JSON: {0}")]
    TaxonomyJson(#[from] serde_json::Error),

    #[error("invalid keyword taxonomy: {0}")]
    InvalidTaxonomy(String),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("cannot read document {path}: {source}")]
    DocumentIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("pdf extraction failed for {path}: {message}")]
    Pdf { path: PathBuf, message: String },

    #[error("docx parsing failed for {path}: {message}")]
    Docx { path: PathBuf, message: String },

    #[error("unsupported document format: {0}")]
    UnsupportedFormat(PathBuf),
}
