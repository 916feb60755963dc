use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use esgster::command::Session;
use esgster::document::DocumentContext;

use super::Analyzer;

pub fn handle_chat_session(analyzer: &Analyzer, path: Option<PathBuf>) -> anyhow::Result<()> {
    let mut session = Session::new(&analyzer.tokenizer, &analyzer.taxonomy);
    session.top_n = analyzer.config.top_n;
    session.top_words = analyzer.config.top_words;

    if let Some(path) = path {
        let context = DocumentContext::open(&path, &analyzer.config.extract_options())
            .with_context(|| format!("Cannot extract {}", path.display()))?;
        println!("Loaded {} ({} pages)", context.name(), context.pages.len());
        session = session.with_document(context);
    }

    let mut input = String::new();
    loop {
        println!("Please input your command (type 'quit' to exit)>>>");
        input.clear();
        io::stdout().flush()?;
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let prompt = input.trim();
        if prompt.eq_ignore_ascii_case("quit") {
            break;
        }
        if prompt.is_empty() {
            continue;
        }

        println!("\n{}\n", session.respond(prompt));
    }

    Ok(())
}
