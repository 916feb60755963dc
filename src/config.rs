use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer::{DEFAULT_CHINESE_THRESHOLD, DEFAULT_STOPWORDS};
use crate::analysis::{TokenizerOptions, DEFAULT_TOP_N};
use crate::document::ExtractOptions;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    // Taxonomy
    pub keywords_path: PathBuf,

    // Scoring
    pub top_n: usize,
    pub top_words: usize,

    // Tokenizer
    pub chinese_threshold: f64,
    pub stopwords: Vec<String>,

    // Extraction
    pub max_pages: Option<usize>,
    pub skip_pages: Vec<u32>,
}

impl Config {
    pub fn tokenizer_options(&self) -> TokenizerOptions {
        TokenizerOptions {
            chinese_threshold: self.chinese_threshold,
            stopwords: self.stopwords.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    pub fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            max_pages: self.max_pages,
            skip_pages: self.skip_pages.clone(),
        }
    }
}

/// Defaults, then `config.toml` (optional), then `ESGSTER_*` variables.
pub fn read_config() -> crate::Result<Config> {
    read_config_from("config")
}

pub fn read_config_from(name: &str) -> crate::Result<Config> {
    read_config_with(name, environment())
}

/// `ESGSTER_*` overlay. List keys take comma separated values, e.g.
/// `ESGSTER_SKIP_PAGES=1,2`.
fn environment() -> config::Environment {
    config::Environment::with_prefix("ESGSTER")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("stopwords")
        .with_list_parse_key("skip_pages")
}

fn read_config_with(name: &str, environment: config::Environment) -> crate::Result<Config> {
    let stopwords: Vec<String> = DEFAULT_STOPWORDS.iter().map(|s| s.to_string()).collect();
    let skip_pages: Vec<i64> = Vec::new();

    Ok(config::Config::builder()
        .set_default("keywords_path", "esg_keywords.json")?
        .set_default("top_n", DEFAULT_TOP_N as u64)?
        .set_default("top_words", 20u64)?
        .set_default("chinese_threshold", DEFAULT_CHINESE_THRESHOLD)?
        .set_default("stopwords", stopwords)?
        .set_default("skip_pages", skip_pages)?
        .add_source(config::File::with_name(name).required(false))
        .add_source(environment)
        .build()?
        .try_deserialize::<Config>()?)
}
