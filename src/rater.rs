//! Sentence rating driver

use std::fmt;

use crate::config::Config;
use crate::dictionary::{DictionaryLoader, WordTiers};
use crate::scoring::{Level, Scorer};
use crate::tokenizer::{normalize_word, Tokenizer};

/// Result of analyzing one sentence
#[derive(Debug, Clone)]
pub struct Report {
    /// The sentence as entered, kept verbatim
    pub sentence: String,
    /// Sum of per-token weights
    pub score: u32,
    /// Categorical level derived from the score
    pub level: Level,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sentence: {}", self.sentence)?;
        writeln!(f, "Complexity Score: {}", self.score)?;
        write!(f, "Complexity Level: {}", self.level)
    }
}

/// Rates sentences against a tiered vocabulary
#[derive(Debug)]
pub struct Rater {
    tiers: WordTiers,
    tokenizer: Tokenizer,
}

impl Rater {
    /// Creates a rater with the vocabulary configured in `config`.
    ///
    /// Fails if the word difficulty file cannot be read.
    pub fn new(config: &Config) -> Result<Self, String> {
        let tiers = DictionaryLoader::load_from_file(&config.dictionary_path).map_err(|e| {
            format!(
                "error loading dictionary '{}': {}",
                config.dictionary_path.display(),
                e
            )
        })?;

        Ok(Self::with_tiers(tiers))
    }

    /// Creates a rater over an already-built vocabulary
    pub fn with_tiers(tiers: WordTiers) -> Self {
        Self {
            tiers,
            tokenizer: Tokenizer::new(),
        }
    }

    /// Analyzes one sentence and produces its report
    pub fn rate(&self, sentence: &str) -> Report {
        let tokens = self.tokenizer.tokenize(sentence);
        let score = Scorer::new(&self.tiers).score(&tokens);

        Report {
            sentence: sentence.to_string(),
            score,
            level: Level::from_score(score),
        }
    }

    /// Checks whether a word is listed in any tier of the vocabulary
    pub fn is_word_listed(&self, word: &str) -> bool {
        self.tiers.contains(&normalize_word(word))
    }
}
