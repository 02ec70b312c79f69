//! Semantic extractors.
//!
//! Five independent, stateless mappers, one per slice of the domain model.
//! Each receives its named section (or `None` when the document lacks it)
//! and never fails: missing or malformed content degrades to defaults so a
//! structurally valid but sparse document still yields a usable build.

mod character;
mod gear;
mod passives;
mod skills;
mod stats;

pub use character::extract_character;
pub use gear::extract_gear;
pub use passives::extract_passives;
pub use skills::extract_skills;
pub use stats::extract_stats;
