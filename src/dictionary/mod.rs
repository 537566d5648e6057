//! Dictionary module
//!
//! Loading and lookup of the tiered vocabulary.

pub mod loader;
pub mod tiers;

pub use loader::DictionaryLoader;
pub use tiers::{Tier, WordTiers};
