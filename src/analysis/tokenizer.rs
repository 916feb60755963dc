use std::collections::HashSet;

use jieba_rs::Jieba;
use log::debug;

use super::Frequencies;

pub const DEFAULT_CHINESE_THRESHOLD: f64 = 0.3;

pub const DEFAULT_STOPWORDS: &[&str] = &[
    "the", "and", "is", "in", "to", "for", "of", "on", "at", "by", "with", "an", "be", "this",
    "that", "from", "as", "are", "it", "or", "which", "has", "was", "a", "none",
];

const LENGTH_EPSILON: f64 = 1e-5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Chinese,
    English,
}

#[derive(Debug, Clone)]
pub struct TokenizerOptions {
    /// Texts whose CJK character fraction exceeds this go through segmentation.
    pub chinese_threshold: f64,
    pub stopwords: HashSet<String>,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            chinese_threshold: DEFAULT_CHINESE_THRESHOLD,
            stopwords: DEFAULT_STOPWORDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

pub fn is_cjk(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

fn is_latin_alpha(c: char) -> bool {
    c.is_alphabetic() && !is_cjk(c)
}

/// Fraction of characters in the CJK Unified Ideographs block.
pub fn cjk_ratio(text: &str) -> f64 {
    let mut total = 0usize;
    let mut cjk = 0usize;
    for c in text.chars() {
        total += 1;
        if is_cjk(c) {
            cjk += 1;
        }
    }
    cjk as f64 / (total as f64 + LENGTH_EPSILON)
}

/// Language-aware word extraction. Build once and share; loading the
/// segmentation dictionary is the expensive part.
pub struct Tokenizer {
    jieba: Jieba,
    options: TokenizerOptions,
}

impl Tokenizer {
    pub fn new(options: TokenizerOptions) -> Self {
        Self {
            jieba: Jieba::new(),
            options,
        }
    }

    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    pub fn detect_language(&self, text: &str) -> Language {
        if cjk_ratio(text) > self.options.chinese_threshold {
            Language::Chinese
        } else {
            Language::English
        }
    }

    /// Candidate words in text order. `hint` skips script detection.
    pub fn extract_words(&self, text: &str, hint: Option<Language>) -> Vec<String> {
        let language = hint.unwrap_or_else(|| self.detect_language(text));
        debug!("tokenizing {} chars as {:?}", text.chars().count(), language);

        match language {
            Language::Chinese => self.segment_chinese(text),
            Language::English => self.split_english(text),
        }
    }

    pub fn tokenize(&self, text: &str, hint: Option<Language>) -> Frequencies {
        let mut frequencies = Frequencies::new();
        for word in self.extract_words(text, hint) {
            *frequencies.entry(word).or_insert(0) += 1;
        }
        frequencies
    }

    fn segment_chinese(&self, text: &str) -> Vec<String> {
        self.jieba
            .cut(text, true)
            .into_iter()
            .map(str::trim)
            .filter(|word| word.chars().count() >= 2 && word.chars().all(is_cjk))
            .map(str::to_string)
            .collect()
    }

    fn split_english(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .filter(|word| word.chars().all(is_latin_alpha))
            .map(str::to_lowercase)
            .filter(|word| !self.options.stopwords.contains(word))
            .collect()
    }
}
