use log::debug;

use super::{
    AnalysisResult, Dimension, DimensionResult, Frequencies, KeywordTaxonomy, RATIO_EPSILON,
};

/// Largest ratio a dimension can report. Past ~2^37 matches the epsilon is
/// lost to rounding and `count / total` would reach 1.0.
const MAX_RATIO: f64 = 1.0 - f64::EPSILON;

/// Score word frequencies against the taxonomy.
///
/// Keywords absent from `frequencies` are left out entirely. Matched keywords
/// are ranked by descending count; equal counts keep taxonomy order. `count`
/// covers every match, while `keywords` holds at most `top_n` of them.
pub fn score(
    frequencies: &Frequencies,
    taxonomy: &KeywordTaxonomy,
    top_n: usize,
) -> AnalysisResult {
    let dimensions = Dimension::ALL
        .map(|dimension| score_dimension(frequencies, taxonomy, dimension, top_n));

    let total = dimensions.iter().map(|d| d.count).sum::<usize>() as f64 + RATIO_EPSILON;
    let dimensions = dimensions.map(|mut result| {
        result.ratio = (result.count as f64 / total).min(MAX_RATIO);
        result
    });

    debug!(
        "scored {} distinct words: E={} S={} G={}",
        frequencies.len(),
        dimensions[0].count,
        dimensions[1].count,
        dimensions[2].count
    );
    AnalysisResult::new(dimensions)
}

fn score_dimension(
    frequencies: &Frequencies,
    taxonomy: &KeywordTaxonomy,
    dimension: Dimension,
    top_n: usize,
) -> DimensionResult {
    let mut matched: Vec<(String, usize)> = taxonomy
        .keywords(dimension)
        .iter()
        .filter_map(|keyword| {
            frequencies
                .get(keyword)
                .map(|&count| (keyword.clone(), count))
        })
        .filter(|(_, count)| *count > 0)
        .collect();

    let count = matched.iter().map(|(_, c)| c).sum::<usize>();

    // stable: ties stay in taxonomy order
    matched.sort_by(|a, b| b.1.cmp(&a.1));
    matched.truncate(top_n);

    DimensionResult {
        dimension,
        count,
        keywords: matched,
        ratio: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn freq(pairs: &[(&str, usize)]) -> Frequencies {
        pairs.iter().map(|(w, c)| (w.to_string(), *c)).collect()
    }

    #[test]
    fn test_empty_frequencies() {
        let taxonomy = KeywordTaxonomy::new().with_keywords(Dimension::Social, ["safety"]);
        let result = score(&Frequencies::new(), &taxonomy, 10);
        for dim in result.iter() {
            assert_eq!(dim.count, 0);
            assert!(dim.keywords.is_empty());
            assert_eq!(dim.ratio, 0.0);
        }
    }

    #[test]
    fn test_no_matches_is_zero_not_nan() {
        let taxonomy = KeywordTaxonomy::new()
            .with_keywords(Dimension::Environmental, ["carbon"])
            .with_keywords(Dimension::Governance, ["board"]);
        let result = score(&freq(&[("revenue", 4), ("growth", 2)]), &taxonomy, 10);
        for dim in result.iter() {
            assert_eq!(dim.count, 0);
            assert!(!dim.ratio.is_nan());
            assert_eq!(dim.ratio, 0.0);
        }
    }

    #[test]
    fn test_missing_dimension_is_empty() {
        let taxonomy = KeywordTaxonomy::new().with_keywords(Dimension::Environmental, ["carbon"]);
        let result = score(&freq(&[("carbon", 1), ("board", 5)]), &taxonomy, 10);
        assert_eq!(result.get(Dimension::Governance).count, 0);
        assert_eq!(result.get(Dimension::Environmental).count, 1);
    }

    #[test]
    fn test_ranking_ties_keep_taxonomy_order() {
        let taxonomy = KeywordTaxonomy::new()
            .with_keywords(Dimension::Environmental, ["water", "carbon", "waste", "energy"]);
        let result = score(
            &freq(&[("carbon", 3), ("water", 1), ("energy", 3), ("waste", 1)]),
            &taxonomy,
            10,
        );
        let env = result.get(Dimension::Environmental);
        let order: Vec<&str> = env.keywords.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(order, vec!["carbon", "energy", "water", "waste"]);
        assert_eq!(env.count, 8);
    }

    #[test]
    fn test_top_n_truncates_keywords_not_count() {
        let taxonomy = KeywordTaxonomy::new()
            .with_keywords(Dimension::Social, ["safety", "health", "training"]);
        let frequencies = freq(&[("safety", 5), ("health", 3), ("training", 1)]);

        let result = score(&frequencies, &taxonomy, 2);
        let social = result.get(Dimension::Social);
        assert_eq!(social.keywords.len(), 2);
        assert_eq!(social.count, 9);
        assert_eq!(social.keyword_count("training"), None);

        let result = score(&frequencies, &taxonomy, 0);
        assert!(result.get(Dimension::Social).keywords.is_empty());
        assert_eq!(result.get(Dimension::Social).count, 9);
    }

    #[test]
    fn test_ratios_split_total() {
        let taxonomy = KeywordTaxonomy::new()
            .with_keywords(Dimension::Environmental, ["carbon"])
            .with_keywords(Dimension::Social, ["safety"])
            .with_keywords(Dimension::Governance, ["board"]);
        let frequencies = freq(&[("carbon", 2), ("safety", 1), ("board", 1)]);
        let result = score(&frequencies, &taxonomy, 10);

        assert!((result.get(Dimension::Environmental).ratio - 0.5).abs() < 1e-5);
        assert!((result.get(Dimension::Social).ratio - 0.25).abs() < 1e-5);
        let sum: f64 = result.iter().map(|d| d.ratio).sum();
        assert!(sum < 1.0 && sum > 0.9999);
    }

    #[test]
    fn test_huge_count_ratio_stays_below_one() {
        let taxonomy = KeywordTaxonomy::new().with_keywords(Dimension::Environmental, ["carbon"]);
        let result = score(&freq(&[("carbon", 1usize << 40)]), &taxonomy, 10);
        let env = result.get(Dimension::Environmental);
        assert!(env.ratio < 1.0);
        assert!(env.ratio > 0.999);
    }
}
