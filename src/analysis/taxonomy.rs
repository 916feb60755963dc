use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{info, warn};
use serde_json::Value;

use super::Dimension;
use crate::error::{Error, Result};

/// Per-dimension keyword sets. Keywords keep their source order, which is
/// the tie-break order when ranking matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordTaxonomy {
    keywords: [Vec<String>; 3],
}

impl KeywordTaxonomy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a dimension's keywords. Later duplicates are dropped.
    pub fn with_keywords<I, S>(mut self, dimension: Dimension, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        self.keywords[dimension as usize] = keywords
            .into_iter()
            .map(Into::into)
            .filter(|k: &String| seen.insert(k.clone()))
            .collect();
        self
    }

    pub fn keywords(&self, dimension: Dimension) -> &[String] {
        &self.keywords[dimension as usize]
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.iter().all(Vec::is_empty)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| Error::TaxonomyIo {
            path: path.to_path_buf(),
            source,
        })?;
        let taxonomy = Self::from_json_str(&raw)?;
        info!(
            "loaded keyword taxonomy from {} ({} / {} / {} keywords)",
            path.display(),
            taxonomy.keywords(Dimension::Environmental).len(),
            taxonomy.keywords(Dimension::Social).len(),
            taxonomy.keywords(Dimension::Governance).len(),
        );
        Ok(taxonomy)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(&value)
    }

    /// Only a non-object root is an error. A dimension that is missing or
    /// not a list of strings degrades to an empty keyword set.
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            Error::InvalidTaxonomy(format!(
                "expected an object keyed by dimension names, found {}",
                json_kind(value)
            ))
        })?;

        for key in object.keys() {
            if Dimension::from_name(key).is_none() {
                warn!("ignoring unknown taxonomy dimension '{}'", key);
            }
        }

        let mut taxonomy = Self::new();
        for dimension in Dimension::ALL {
            match object.get(dimension.name()) {
                None => warn!("taxonomy has no '{}' dimension", dimension),
                Some(entry) => match string_list(entry) {
                    Some(keywords) => taxonomy = taxonomy.with_keywords(dimension, keywords),
                    None => warn!(
                        "taxonomy dimension '{}' is not a list of strings ({}), treating as empty",
                        dimension,
                        json_kind(entry)
                    ),
                },
            }
        }
        Ok(taxonomy)
    }
}

fn string_list(value: &Value) -> Option<Vec<&str>> {
    value.as_array()?.iter().map(Value::as_str).collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
