use std::fmt;

use crate::analysis::{score, KeywordTaxonomy, Tokenizer, DEFAULT_TOP_N};
use crate::document::DocumentContext;
use crate::report;

const SHOW_PAGE_PREFIX: &str = "show pdf page";

const NO_DOCUMENT: &str = "Please upload a PDF file to get context.";

const USAGE: &str = "It looks like your prompt might not match the expected operations.

Try entering prompts like:
- Show content
- Show pdf page <num>
- ESG analysis
- Which dimension is emphasized

Also, make sure you've uploaded a PDF file first!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ShowContent,
    ShowPage(u32),
    EsgAnalysis,
    DimensionEmphasis,
    Help,
}

const COMMANDS: &[(&str, Command)] = &[
    ("show content", Command::ShowContent),
    ("esg analysis", Command::EsgAnalysis),
    ("which dimension is emphasized", Command::DimensionEmphasis),
    ("help", Command::Help),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    Unrecognized,
    MissingPageNumber,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Unrecognized => f.write_str(USAGE),
            CommandError::MissingPageNumber => {
                f.write_str("Please specify the page number, e.g., `Show PDF page 2`.")
            }
        }
    }
}

impl std::error::Error for CommandError {}

fn normalize(prompt: &str) -> String {
    prompt
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

impl Command {
    pub fn parse(prompt: &str) -> Result<Command, CommandError> {
        let prompt = normalize(prompt);

        if let Some((_, command)) = COMMANDS.iter().find(|(name, _)| *name == prompt) {
            return Ok(*command);
        }

        if let Some(rest) = prompt.strip_prefix(SHOW_PAGE_PREFIX) {
            return rest
                .trim()
                .parse::<u32>()
                .map(Command::ShowPage)
                .map_err(|_| CommandError::MissingPageNumber);
        }

        Err(CommandError::Unrecognized)
    }
}

/// Everything one chat conversation needs to answer prompts.
pub struct Session<'a> {
    pub tokenizer: &'a Tokenizer,
    pub taxonomy: &'a KeywordTaxonomy,
    pub document: Option<DocumentContext>,
    pub top_n: usize,
    pub top_words: usize,
}

impl<'a> Session<'a> {
    pub fn new(tokenizer: &'a Tokenizer, taxonomy: &'a KeywordTaxonomy) -> Self {
        Self {
            tokenizer,
            taxonomy,
            document: None,
            top_n: DEFAULT_TOP_N,
            top_words: 20,
        }
    }

    pub fn with_document(mut self, document: DocumentContext) -> Self {
        self.document = Some(document);
        self
    }

    pub fn respond(&self, prompt: &str) -> String {
        let command = match Command::parse(prompt) {
            Ok(command) => command,
            Err(err) => return err.to_string(),
        };

        if command == Command::Help {
            return USAGE.to_string();
        }

        let document = match &self.document {
            Some(document) if !document.is_empty() => document,
            _ => return NO_DOCUMENT.to_string(),
        };

        match command {
            Command::ShowContent => format!(
                "Here's what I found from the uploaded document:\n\n{}",
                document.render_all()
            ),
            Command::ShowPage(page) => document.render_page(page),
            Command::EsgAnalysis => {
                let frequencies = self.tokenizer.tokenize(&document.full_text(), None);
                let result = score(&frequencies, self.taxonomy, self.top_n);
                let words = report::top_words(&frequencies, self.top_words);
                report::format_report(&document.name(), &result, &words)
            }
            Command::DimensionEmphasis => {
                let frequencies = self.tokenizer.tokenize(&document.full_text(), None);
                let result = score(&frequencies, self.taxonomy, self.top_n);
                format!(
                    "{}\nThis report places the greatest emphasis on: {}",
                    report::format_summary(&result),
                    result.main_focus()
                )
            }
            Command::Help => USAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::analysis::{Dimension, TokenizerOptions};
    use crate::document::Page;

    #[test]
    fn test_parse_table() {
        assert_eq!(Command::parse("  Show   CONTENT "), Ok(Command::ShowContent));
        assert_eq!(Command::parse("ESG analysis"), Ok(Command::EsgAnalysis));
        assert_eq!(
            Command::parse("Which dimension is emphasized"),
            Ok(Command::DimensionEmphasis)
        );
        assert_eq!(Command::parse("Show PDF page 12"), Ok(Command::ShowPage(12)));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Command::parse("show pdf page"), Err(CommandError::MissingPageNumber));
        assert_eq!(Command::parse("show pdf page two"), Err(CommandError::MissingPageNumber));
        assert_eq!(Command::parse("summarize please"), Err(CommandError::Unrecognized));
        assert_eq!(Command::parse(""), Err(CommandError::Unrecognized));
    }

    fn session_fixture(tokenizer: &Tokenizer, taxonomy: &KeywordTaxonomy) -> String {
        let document = DocumentContext::new(
            PathBuf::from("esg.pdf"),
            vec![
                Page { page: 1, content: "Our board oversees audit".into() },
                Page { page: 2, content: "carbon carbon targets".into() },
            ],
        );
        let session = Session::new(tokenizer, taxonomy).with_document(document);
        session.respond("which dimension is emphasized")
    }

    #[test]
    fn test_session_responses() {
        let tokenizer = Tokenizer::new(TokenizerOptions::default());
        let taxonomy = KeywordTaxonomy::new()
            .with_keywords(Dimension::Environmental, ["carbon"])
            .with_keywords(Dimension::Governance, ["board", "audit", "oversees"]);

        let answer = session_fixture(&tokenizer, &taxonomy);
        assert!(answer.ends_with("greatest emphasis on: Governance"));

        let empty = Session::new(&tokenizer, &taxonomy);
        assert_eq!(empty.respond("show content"), NO_DOCUMENT);
        assert_eq!(empty.respond("what is this"), USAGE);
        assert_eq!(empty.respond("help"), USAGE);
    }

    #[test]
    fn test_session_pages() {
        let tokenizer = Tokenizer::new(TokenizerOptions::default());
        let taxonomy = KeywordTaxonomy::new();
        let document = DocumentContext::new(
            PathBuf::from("esg.pdf"),
            vec![Page { page: 1, content: "hello".into() }],
        );
        let session = Session::new(&tokenizer, &taxonomy).with_document(document);
        assert_eq!(session.respond("show pdf page 1"), "[Page 1]: hello");
        assert_eq!(session.respond("show pdf page 3"), "Page 3 not found in the PDF.");
        assert!(session.respond("show content").contains("[Page 1]: hello"));
        assert!(session.respond("esg analysis").contains("No keywords found."));
    }
}
