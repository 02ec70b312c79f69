//! Buildscope Suggest: improvement recommendations.
//!
//! Four independent generators (one per category) emit candidates from the
//! build and its analysis; the aggregator then rescores, deduplicates,
//! sorts and caps them. Like the classifiers, this stage is total: every
//! valid input produces a valid (possibly generic) suggestion list.

pub mod aggregator;
mod gear;
mod gems;
mod passives;
mod utility;

use buildscope_core::{
    BuildAnalysis, ParsedBuild, Suggestion, SuggestionCategory, SuggestionPriority,
};

/// Generate the final prioritized suggestion list.
///
/// Deterministic for identical inputs: calling twice yields list-equal
/// output.
pub fn suggest(build: &ParsedBuild, analysis: &BuildAnalysis) -> Vec<Suggestion> {
    let mut candidates = Vec::new();
    candidates.extend(gems::suggest_gems(build, analysis));
    candidates.extend(passives::suggest_passives(build, analysis));
    candidates.extend(gear::suggest_gear(build, analysis));
    candidates.extend(utility::suggest_utility(build, analysis));

    if candidates.is_empty() {
        candidates.push(Suggestion::new(
            SuggestionCategory::Utility,
            SuggestionPriority::Optional,
            "Build looks well-rounded",
            "Keep incremental upgrades going: gem quality, flask rolls, minor gear swaps",
            "Marginal gains",
        ));
    }

    let final_list = aggregator::aggregate(candidates, analysis);
    tracing::debug!(count = final_list.len(), "generated suggestions");
    final_list
}
