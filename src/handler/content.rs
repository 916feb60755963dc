use std::path::Path;

use anyhow::Context;
use esgster::config::Config;
use esgster::document::DocumentContext;

pub fn print_content(config: &Config, path: &Path, page: Option<u32>) -> anyhow::Result<()> {
    let context = DocumentContext::open(path, &config.extract_options())
        .with_context(|| format!("Cannot extract {}", path.display()))?;

    match page {
        Some(page) => println!("{}", context.render_page(page)),
        None => println!("{}", context.render_all()),
    }
    Ok(())
}
