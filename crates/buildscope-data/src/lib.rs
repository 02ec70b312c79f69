//! Buildscope Data: embedded reference assets.
//!
//! The keyword tables and the keystone lookup are deliberately data, not
//! code: each is a swappable asset consumed by one generic scoring or
//! lookup routine, so the classifiers stay testable independent of the
//! keyword content. Everything here is read-only and loaded lazily once
//! per process, then handed to consumers as an injected dependency.

pub mod keystones;
pub mod keywords;
pub mod stat_names;

pub use keystones::{KeystoneRecord, KeystoneTable};
pub use keywords::{KeywordEntry, KeywordTable};

/// Phrases whose presence in a suggestion description forces critical
/// priority during aggregation. Matching is case-insensitive substring.
pub const CRITICAL_PHRASES: &[&str] = &[
    "uncapped",
    "resistance is below",
    "no supports",
    "empty",
    "no passives allocated",
    "dangerously low life",
];
