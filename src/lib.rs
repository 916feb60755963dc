pub mod analysis;
pub mod command;
pub mod config;
pub mod document;
pub mod error;
pub mod report;

pub use analysis::{
    analyze_text, score, AnalysisResult, Dimension, DimensionResult, Frequencies,
    KeywordTaxonomy, Language, Tokenizer, TokenizerOptions,
};
pub use error::{Error, Result};
