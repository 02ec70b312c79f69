//! Buildscope Core: domain model, error taxonomy and content cache.
//!
//! Everything downstream of the decode pipeline operates on the immutable
//! aggregates defined here. `ParsedBuild` is created once per unique build
//! code (or served from the cache) and never mutated afterwards;
//! `BuildAnalysis` and `Suggestion` lists are produced fresh per request.

pub mod analysis;
pub mod build;
pub mod cache;
pub mod error;
pub mod suggestion;

pub use analysis::{BuildAnalysis, DefenseRating, OffenseRating, PlaystyleType};
pub use build::{
    Affix, AffixKind, BuildCode, Character, GearSlot, Keystone, Notable, ParsedBuild,
    PassiveAllocation, SkillSetup, SlotKind, Stat, StatSource, SupportGem,
};
pub use cache::{BuildCache, CacheStats};
pub use error::{BuildError, ErrorBody};
pub use suggestion::{Suggestion, SuggestionCategory, SuggestionPriority};

/// Engine version reported by the health endpoint.
pub const BUILDSCOPE_VERSION: &str = env!("CARGO_PKG_VERSION");
