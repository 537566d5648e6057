//! Sentence tokenizer
//!
//! Splits a raw sentence into normalized tokens suitable for tier lookup.

/// Normalizes a sentence fragment for dictionary lookup.
///
/// Lowercases ASCII letters and removes every other character. The
/// normalization is intentionally ASCII-only: the tier sets contain ASCII
/// words, so no Unicode case-folding is applied.
pub fn normalize_word(fragment: &str) -> String {
    fragment
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

/// Sentence tokenizer
#[derive(Debug)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Splits a sentence into normalized tokens.
    ///
    /// The split is on the single space character, not arbitrary whitespace:
    /// tabs and newlines stay inside their fragment and are then removed by
    /// normalization. Fragment order is preserved, and fragments that
    /// normalize to the empty string are kept as empty tokens.
    pub fn tokenize(&self, sentence: &str) -> Vec<String> {
        sentence.split(' ').map(normalize_word).collect()
    }
}
