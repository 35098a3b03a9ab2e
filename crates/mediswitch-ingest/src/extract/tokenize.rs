//! Word tokenizer for TF-IDF vectorization.

use once_cell::sync::Lazy;
use regex::Regex;

use super::stopwords::is_stop_word;

/// Runs of two or more word characters. Single characters ("a", "5") and
/// punctuation never form tokens.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("valid token regex"));

/// Lowercase `text`, split it into word tokens and drop stop words.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN_RE
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|t| !is_stop_word(t))
        .map(str::to_string)
        .collect()
}
