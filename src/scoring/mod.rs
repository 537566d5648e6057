//! Sentence scoring
//!
//! Classifies each token against the tier sets and sums weighted points.

pub mod level;

pub use level::Level;

use crate::dictionary::{Tier, WordTiers};

/// Weighted scorer over a tiered vocabulary
pub struct Scorer<'a> {
    tiers: &'a WordTiers,
}

impl<'a> Scorer<'a> {
    pub fn new(tiers: &'a WordTiers) -> Self {
        Self { tiers }
    }

    /// Points contributed by a single normalized token.
    ///
    /// Hard words add 3 and medium words add 2. Everything else adds the
    /// baseline 1: easy words and unlisted words are equivalent, the
    /// vocabulary only ever raises a token above the baseline.
    pub fn weight(&self, token: &str) -> u32 {
        match self.tiers.tier_of(token) {
            Some(Tier::Hard) => Tier::Hard.weight(),
            Some(Tier::Medium) => Tier::Medium.weight(),
            _ => Tier::Easy.weight(),
        }
    }

    /// Sums the weights of all tokens, in order
    pub fn score(&self, tokens: &[String]) -> u32 {
        tokens.iter().map(|token| self.weight(token)).sum()
    }
}
