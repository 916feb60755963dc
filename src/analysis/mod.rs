pub mod scorer;
pub mod taxonomy;
pub mod tokenizer;

use std::collections::HashMap;
use std::fmt;

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

pub use scorer::score;
pub use taxonomy::KeywordTaxonomy;
pub use tokenizer::{Language, Tokenizer, TokenizerOptions};

/// Word -> occurrence count for one text.
pub type Frequencies = HashMap<String, usize>;

/// Added to the ratio denominator so empty documents score 0 instead of NaN.
pub const RATIO_EPSILON: f64 = 1e-5;

pub const DEFAULT_TOP_N: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    Environmental,
    Social,
    Governance,
}

impl Dimension {
    /// Fixed scoring order.
    pub const ALL: [Dimension; 3] = [
        Dimension::Environmental,
        Dimension::Social,
        Dimension::Governance,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Dimension::Environmental => "Environmental",
            Dimension::Social => "Social",
            Dimension::Governance => "Governance",
        }
    }

    pub fn from_name(name: &str) -> Option<Dimension> {
        Dimension::ALL.into_iter().find(|d| d.name() == name)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DimensionResult {
    pub dimension: Dimension,
    /// Sum of occurrences of every matched keyword, not only the top-N.
    pub count: usize,
    /// Matched keywords by descending count, truncated to top-N.
    pub keywords: Vec<(String, usize)>,
    pub ratio: f64,
}

impl DimensionResult {
    pub fn keyword_count(&self, keyword: &str) -> Option<usize> {
        self.keywords
            .iter()
            .find(|(word, _)| word == keyword)
            .map(|(_, count)| *count)
    }
}

impl Serialize for DimensionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Keywords<'a>(&'a [(String, usize)]);

        impl Serialize for Keywords<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for (word, count) in self.0 {
                    map.serialize_entry(word, count)?;
                }
                map.end()
            }
        }

        let mut state = serializer.serialize_struct("DimensionResult", 3)?;
        state.serialize_field("count", &self.count)?;
        state.serialize_field("keywords", &Keywords(&self.keywords))?;
        state.serialize_field("ratio", &self.ratio)?;
        state.end()
    }
}

/// Scores for the three dimensions, always in `Dimension::ALL` order.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    dimensions: [DimensionResult; 3],
}

impl AnalysisResult {
    pub(crate) fn new(dimensions: [DimensionResult; 3]) -> Self {
        Self { dimensions }
    }

    pub fn get(&self, dimension: Dimension) -> &DimensionResult {
        &self.dimensions[dimension.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &DimensionResult> {
        self.dimensions.iter()
    }

    pub fn total_count(&self) -> usize {
        self.dimensions.iter().map(|d| d.count).sum()
    }

    /// Dimension with the largest ratio. Ties go to the earliest dimension,
    /// so an all-zero result reports `Environmental`.
    pub fn main_focus(&self) -> Dimension {
        let mut best = &self.dimensions[0];
        for candidate in &self.dimensions[1..] {
            if candidate.ratio > best.ratio {
                best = candidate;
            }
        }
        best.dimension
    }
}

impl Serialize for AnalysisResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.dimensions.len()))?;
        for result in &self.dimensions {
            map.serialize_entry(result.dimension.name(), result)?;
        }
        map.end()
    }
}

/// Tokenize `text` and score it in one pass.
pub fn analyze_text(
    tokenizer: &Tokenizer,
    text: &str,
    taxonomy: &KeywordTaxonomy,
    top_n: usize,
) -> AnalysisResult {
    let frequencies = tokenizer.tokenize(text, None);
    score(&frequencies, taxonomy, top_n)
}
