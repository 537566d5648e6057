//! Tiered word sets
//!
//! Stores the vocabulary partitioned into three difficulty tiers and parses
//! the tier declarations of a word difficulty file.

use std::collections::HashSet;

/// Difficulty tier of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Easy,
    Medium,
    Hard,
}

impl Tier {
    /// Points a word of this tier contributes to the sentence score.
    /// Easy words score the same as unlisted words.
    pub fn weight(&self) -> u32 {
        match self {
            Tier::Hard => 3,
            Tier::Medium => 2,
            Tier::Easy => 1,
        }
    }
}

/// Vocabulary partitioned into the three difficulty tiers
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordTiers {
    easy: HashSet<String>,
    medium: HashSet<String>,
    hard: HashSet<String>,
}

impl WordTiers {
    /// Creates an empty vocabulary
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the tier sets from the lines of a word difficulty file.
    ///
    /// Each relevant line has the shape `<tag>: <w1>, <w2>, ...` where the
    /// tag is one of `easy`, `medium` or `hard`. The prefix match is
    /// case-sensitive and requires exactly one space after the colon. Lines
    /// matching no prefix (blank lines, comments) are skipped, so a fully
    /// malformed file yields three empty sets.
    pub fn parse(lines: &[String]) -> Self {
        let mut tiers = WordTiers::new();

        for line in lines {
            if let Some(rest) = line.strip_prefix("easy: ") {
                tiers.insert_words(rest, Tier::Easy);
            } else if let Some(rest) = line.strip_prefix("medium: ") {
                tiers.insert_words(rest, Tier::Medium);
            } else if let Some(rest) = line.strip_prefix("hard: ") {
                tiers.insert_words(rest, Tier::Hard);
            }
        }

        tiers
    }

    /// Splits a comma-separated word list and adds each word to a tier.
    ///
    /// The delimiter is the exact two-character sequence ", ". Each fragment
    /// is trimmed and lowercased before insertion; empty fragments are
    /// inserted like any other word.
    pub fn insert_words(&mut self, words: &str, tier: Tier) {
        for word in words.split(", ") {
            self.insert(word.trim().to_lowercase(), tier);
        }
    }

    /// Adds a single already-normalized word to a tier
    pub fn insert(&mut self, word: String, tier: Tier) {
        match tier {
            Tier::Easy => self.easy.insert(word),
            Tier::Medium => self.medium.insert(word),
            Tier::Hard => self.hard.insert(word),
        };
    }

    /// Looks up the effective tier of a normalized word.
    ///
    /// The sets are not required to be disjoint; a word listed in several
    /// tiers resolves to the hardest one.
    pub fn tier_of(&self, word: &str) -> Option<Tier> {
        if self.hard.contains(word) {
            Some(Tier::Hard)
        } else if self.medium.contains(word) {
            Some(Tier::Medium)
        } else if self.easy.contains(word) {
            Some(Tier::Easy)
        } else {
            None
        }
    }

    /// Checks whether a word is listed in any tier
    pub fn contains(&self, word: &str) -> bool {
        self.tier_of(word).is_some()
    }

    /// Unions another vocabulary into this one
    pub fn merge(&mut self, other: WordTiers) {
        self.easy.extend(other.easy);
        self.medium.extend(other.medium);
        self.hard.extend(other.hard);
    }

    /// Total number of distinct words across the three sets
    pub fn len(&self) -> usize {
        self.easy.len() + self.medium.len() + self.hard.len()
    }

    /// Checks whether all three sets are empty
    pub fn is_empty(&self) -> bool {
        self.easy.is_empty() && self.medium.is_empty() && self.hard.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_basic() {
        let tiers = WordTiers::parse(&lines(&[
            "easy: the, cat",
            "medium: sat",
            "hard: epistemology",
        ]));

        assert_eq!(tiers.tier_of("the"), Some(Tier::Easy));
        assert_eq!(tiers.tier_of("cat"), Some(Tier::Easy));
        assert_eq!(tiers.tier_of("sat"), Some(Tier::Medium));
        assert_eq!(tiers.tier_of("epistemology"), Some(Tier::Hard));
        assert_eq!(tiers.tier_of("dog"), None);
        assert_eq!(tiers.len(), 4);
    }

    #[test]
    fn test_parse_skips_unrecognized_lines() {
        let tiers = WordTiers::parse(&lines(&[
            "",
            "# a comment",
            "Easy: capitalized tag is not a tag",
            "easy:missing space",
            "medium: sat",
            "trailing junk",
        ]));

        assert_eq!(tiers.len(), 1);
        assert_eq!(tiers.tier_of("sat"), Some(Tier::Medium));
    }

    #[test]
    fn test_parse_fully_malformed_file_is_empty() {
        let tiers = WordTiers::parse(&lines(&["nothing", "to", "see here"]));
        assert!(tiers.is_empty());
    }

    #[test]
    fn test_parse_trims_and_lowercases_words() {
        let tiers = WordTiers::parse(&lines(&["medium: Analyze,  Pattern , theory"]));

        assert_eq!(tiers.tier_of("analyze"), Some(Tier::Medium));
        // The extra spaces around "Pattern" survive the ", " split and are
        // removed by the per-word trim.
        assert_eq!(tiers.tier_of("pattern"), Some(Tier::Medium));
        assert_eq!(tiers.tier_of("theory"), Some(Tier::Medium));
    }

    #[test]
    fn test_parse_unions_repeated_tier_lines() {
        let tiers = WordTiers::parse(&lines(&[
            "easy: the, and",
            "easy: of, the",
        ]));

        assert_eq!(tiers.len(), 3);
        assert_eq!(tiers.tier_of("of"), Some(Tier::Easy));
    }

    #[test]
    fn test_parse_keeps_empty_fragments() {
        // "hard: " strips to the empty remainder, which is one empty word.
        let tiers = WordTiers::parse(&lines(&["hard: "]));

        assert_eq!(tiers.tier_of(""), Some(Tier::Hard));
        assert_eq!(tiers.len(), 1);
    }

    #[test]
    fn test_tier_of_prefers_hard_over_medium_over_easy() {
        let tiers = WordTiers::parse(&lines(&[
            "easy: shared, lower",
            "medium: shared, lower",
            "hard: shared",
        ]));

        assert_eq!(tiers.tier_of("shared"), Some(Tier::Hard));
        assert_eq!(tiers.tier_of("lower"), Some(Tier::Medium));
    }

    #[test]
    fn test_merge_of_same_parse_is_idempotent() {
        let raw = lines(&["easy: the, cat", "medium: sat", "hard: epistemology"]);

        let once = WordTiers::parse(&raw);
        let mut twice = WordTiers::parse(&raw);
        twice.merge(WordTiers::parse(&raw));

        assert_eq!(once, twice);
    }

    #[test]
    fn test_weights() {
        assert_eq!(Tier::Easy.weight(), 1);
        assert_eq!(Tier::Medium.weight(), 2);
        assert_eq!(Tier::Hard.weight(), 3);
    }
}
