use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use esgster::config::Config;
use esgster::{KeywordTaxonomy, Tokenizer};

mod analyze;
mod chat;
mod content;

#[derive(Parser)]
#[command(name = "esgster")]
#[command(about = "ESG keyword analysis for sustainability reports", version = "0.1")]
pub enum Cli {
    /// Score documents against the ESG keyword taxonomy
    Analyze {
        #[arg(help = "File or directory path")]
        path: PathBuf,

        #[arg(short, long, help = "Recurse into subdirectories")]
        recursive: bool,

        #[arg(long, help = "Keywords kept per dimension")]
        top_n: Option<usize>,

        #[arg(long, help = "Print results as JSON")]
        json: bool,

        #[arg(long, help = "Also write an Excel summary to this path")]
        excel: Option<PathBuf>,
    },

    /// Print the extracted text of a document
    Content {
        path: PathBuf,

        #[arg(short, long, help = "Only this page (1-based)")]
        page: Option<u32>,
    },

    /// Ask questions about a document interactively
    Chat {
        path: Option<PathBuf>,
    },
}

/// Shared read-only state, loaded once per process.
pub struct Analyzer {
    pub config: Config,
    pub tokenizer: Tokenizer,
    pub taxonomy: KeywordTaxonomy,
}

impl Analyzer {
    pub fn from_config(config: Config) -> anyhow::Result<Analyzer> {
        let taxonomy = KeywordTaxonomy::load(&config.keywords_path)
            .with_context(|| {
                format!("Cannot load keyword taxonomy {}", config.keywords_path.display())
            })?;
        let tokenizer = Tokenizer::new(config.tokenizer_options());
        Ok(Analyzer { config, tokenizer, taxonomy })
    }
}

pub fn handler(args: Cli, config: Config) -> anyhow::Result<()> {
    match args {
        Cli::Analyze { path, recursive, top_n, json, excel } => {
            let analyzer = Analyzer::from_config(config)?;
            let options = analyze::AnalyzeOptions {
                recursive,
                top_n: top_n.unwrap_or(analyzer.config.top_n),
                json,
                excel,
            };
            analyze::analyze_path(&analyzer, path, &options)
        }
        Cli::Content { path, page } => content::print_content(&config, &path, page),
        Cli::Chat { path } => {
            let analyzer = Analyzer::from_config(config)?;
            chat::handle_chat_session(&analyzer, path)
        }
    }
}
