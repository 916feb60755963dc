use std::path::{Path, PathBuf};

use anyhow::Context;
use esgster::document::{self, DocumentContext};
use esgster::report::{self, ReportRow};
use esgster::score;
use log::warn;
use walkdir::DirEntry;

use super::Analyzer;

pub struct AnalyzeOptions {
    pub recursive: bool,
    pub top_n: usize,
    pub json: bool,
    pub excel: Option<PathBuf>,
}

pub fn analyze_path(
    analyzer: &Analyzer,
    path: PathBuf,
    options: &AnalyzeOptions,
) -> anyhow::Result<()> {
    let rows = if path.is_dir() {
        analyze_directory(analyzer, &path, options)?
    } else {
        vec![analyze_single_file(analyzer, &path, options)?]
    };

    if let Some(excel) = &options.excel {
        report::export_to_excel(excel, &rows)
            .with_context(|| format!("Cannot write Excel summary {}", excel.display()))?;
        println!("Saved summary of {} document(s) to {}", rows.len(), excel.display());
    }
    Ok(())
}

fn analyze_directory(
    analyzer: &Analyzer,
    path: &Path,
    options: &AnalyzeOptions,
) -> anyhow::Result<Vec<ReportRow>> {
    let mut rows = Vec::new();

    for entry in get_entries(path, options.recursive) {
        let entry_path = entry.path();
        if !entry_path.is_file() {
            continue;
        }
        if document::is_supported(entry_path) {
            rows.push(analyze_single_file(analyzer, entry_path, options)?);
        } else {
            warn!("skipping unsupported file: {}", entry_path.display());
        }
    }
    Ok(rows)
}

fn analyze_single_file(
    analyzer: &Analyzer,
    path: &Path,
    options: &AnalyzeOptions,
) -> anyhow::Result<ReportRow> {
    let context = DocumentContext::open(path, &analyzer.config.extract_options())
        .with_context(|| format!("Cannot extract {}", path.display()))?;

    let frequencies = analyzer.tokenizer.tokenize(&context.full_text(), None);
    let result = score(&frequencies, &analyzer.taxonomy, options.top_n);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let words = report::top_words(&frequencies, analyzer.config.top_words);
        println!("{}", report::format_report(&context.name(), &result, &words));
    }

    Ok(ReportRow::new(context.name(), result))
}

fn get_entries(path: &Path, recursive: bool) -> Box<dyn Iterator<Item = DirEntry>> {
    let iter = if recursive {
        walkdir::WalkDir::new(path)
    } else {
        walkdir::WalkDir::new(path).max_depth(1)
    };
    Box::new(iter.sort_by_file_name().into_iter().filter_map(|e| e.ok()))
}
