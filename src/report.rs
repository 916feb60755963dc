use std::path::Path;

use chrono::{DateTime, Local};
use rust_xlsxwriter::{Format, FormatAlign, Workbook, XlsxError};

use crate::analysis::{AnalysisResult, Dimension, DimensionResult, Frequencies};

/// One analyzed document, as written to the Excel export.
#[derive(Debug, Clone)]
pub struct ReportRow {
    pub file: String,
    pub result: AnalysisResult,
    pub analyzed_at: DateTime<Local>,
}

impl ReportRow {
    pub fn new(file: impl Into<String>, result: AnalysisResult) -> Self {
        Self {
            file: file.into(),
            result,
            analyzed_at: Local::now(),
        }
    }
}

pub fn format_summary(result: &AnalysisResult) -> String {
    let mut out = String::from("ESG Keyword Frequency\n");
    for dim in result.iter() {
        out.push_str(&format!("- {} Ratio: {:.1}%\n", dim.dimension, dim.ratio * 100.0));
    }
    out.push_str(&format!("\nMain Focus Area: {}\n", result.main_focus()));
    out
}

pub fn format_top_keywords(result: &DimensionResult) -> String {
    if result.keywords.is_empty() {
        return "No keywords found.".to_string();
    }
    result
        .keywords
        .iter()
        .map(|(word, count)| format!("- {}: {}", word, count))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Most frequent words of the whole text, ties broken alphabetically.
pub fn top_words(frequencies: &Frequencies, n: usize) -> Vec<(String, usize)> {
    let mut words: Vec<(String, usize)> = frequencies
        .iter()
        .map(|(word, count)| (word.clone(), *count))
        .collect();
    words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    words.truncate(n);
    words
}

pub fn format_report(
    name: &str,
    result: &AnalysisResult,
    frequent_words: &[(String, usize)],
) -> String {
    let mut out = format!("# ESG Analysis for `{}`\n\n", name);
    out.push_str(&format_summary(result));
    out.push_str("---\n");

    for dim in result.iter() {
        out.push_str(&format!("\nTop {} Keywords\n", dim.dimension));
        out.push_str(&format_top_keywords(dim));
        out.push('\n');
    }

    out.push_str("\nMost Frequent Words\n");
    if frequent_words.is_empty() {
        out.push_str("No words found.\n");
    }
    for (word, count) in frequent_words {
        out.push_str(&format!("- {}: {}\n", word, count));
    }
    out
}

pub fn export_to_excel(path: &Path, rows: &[ReportRow]) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let header_format = Format::new().set_bold().set_align(FormatAlign::Center);

    let mut headers = vec!["File".to_string()];
    for dim in Dimension::ALL {
        headers.push(format!("{} Count", dim));
        headers.push(format!("{} Ratio", dim));
    }
    headers.push("Main Focus".to_string());
    headers.push("Analyzed At".to_string());

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, header, &header_format)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        worksheet.write_string(r, 0, &row.file)?;
        let mut col = 1u16;
        for dim in Dimension::ALL {
            let scored = row.result.get(dim);
            worksheet.write_number(r, col, scored.count as f64)?;
            worksheet.write_number(r, col + 1, scored.ratio)?;
            col += 2;
        }
        worksheet.write_string(r, col, row.result.main_focus().name())?;
        let analyzed_at = row.analyzed_at.format("%Y-%m-%d %H:%M:%S").to_string();
        worksheet.write_string(r, col + 1, &analyzed_at)?;
    }

    worksheet.autofit();
    workbook.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{score, KeywordTaxonomy};

    fn sample() -> AnalysisResult {
        let taxonomy = KeywordTaxonomy::new()
            .with_keywords(Dimension::Environmental, ["carbon", "water"])
            .with_keywords(Dimension::Social, ["safety"]);
        let frequencies: Frequencies = [("carbon", 3), ("water", 1), ("board", 2)]
            .into_iter()
            .map(|(w, c)| (w.to_string(), c))
            .collect();
        score(&frequencies, &taxonomy, 10)
    }

    #[test]
    fn test_format_summary() {
        let summary = format_summary(&sample());
        assert!(summary.contains("- Environmental Ratio: 100.0%"));
        assert!(summary.contains("- Social Ratio: 0.0%"));
        assert!(summary.contains("Main Focus Area: Environmental"));
    }

    #[test]
    fn test_format_top_keywords() {
        let result = sample();
        assert_eq!(
            format_top_keywords(result.get(Dimension::Environmental)),
            "- carbon: 3\n- water: 1"
        );
        assert_eq!(format_top_keywords(result.get(Dimension::Social)), "No keywords found.");
    }

    #[test]
    fn test_top_words_order() {
        let frequencies: Frequencies = [("b", 2), ("a", 2), ("c", 5), ("d", 1)]
            .into_iter()
            .map(|(w, c)| (w.to_string(), c))
            .collect();
        let words = top_words(&frequencies, 3);
        assert_eq!(
            words,
            vec![("c".to_string(), 5), ("a".to_string(), 2), ("b".to_string(), 2)]
        );
    }

    #[test]
    fn test_format_report_sections() {
        let report = format_report("esg.pdf", &sample(), &[("carbon".to_string(), 3)]);
        assert!(report.starts_with("# ESG Analysis for `esg.pdf`"));
        assert!(report.contains("Top Governance Keywords\nNo keywords found."));
        assert!(report.contains("Most Frequent Words\n- carbon: 3"));
    }

    #[test]
    fn test_export_to_excel() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("esg.xlsx");
        export_to_excel(&path, &[ReportRow::new("esg.pdf", sample())])?;
        assert!(path.metadata()?.len() > 0);
        Ok(())
    }
}
