//! Suggestion aggregator: rescore, deduplicate, sort, cap.
//!
//! Each stage is a pure transform over the list, so the pipeline stays
//! composable and testable stage by stage. The order is fixed: rescoring
//! runs before deduplication so forced-critical duplicates collapse into
//! the surviving first occurrence.

use std::collections::{HashMap, HashSet};

use buildscope_core::{
    BuildAnalysis, DefenseRating, OffenseRating, Suggestion, SuggestionCategory,
    SuggestionPriority,
};
use buildscope_data::CRITICAL_PHRASES;

/// Per-category output cap. Critical entries are exempt.
const CATEGORY_CAP: usize = 5;

pub fn aggregate(candidates: Vec<Suggestion>, analysis: &BuildAnalysis) -> Vec<Suggestion> {
    cap(sort(dedupe(rescore(candidates, analysis))))
}

/// Priority rescoring pass.
///
/// A description containing any critical-weakness phrase forces critical
/// priority (never the reverse). Independently, important suggestions are
/// relaxed to optional where the ratings say the axis is already covered:
/// passives/gear under a tanky-or-better defense, gems under extreme
/// offense. Downgrades never touch critical items.
pub fn rescore(candidates: Vec<Suggestion>, analysis: &BuildAnalysis) -> Vec<Suggestion> {
    let defense_covered = matches!(
        analysis.defense,
        DefenseRating::Tanky | DefenseRating::UberViable
    );
    let offense_covered = analysis.offense == OffenseRating::Extreme;

    candidates
        .into_iter()
        .map(|s| {
            let lowered = s.description.to_lowercase();
            if CRITICAL_PHRASES.iter().any(|p| lowered.contains(p)) {
                return s.with_priority(SuggestionPriority::Critical);
            }
            if s.priority == SuggestionPriority::Important {
                let downgrade = match s.category {
                    SuggestionCategory::Passives | SuggestionCategory::Gear => defense_covered,
                    SuggestionCategory::Gems => offense_covered,
                    SuggestionCategory::Utility => false,
                };
                if downgrade {
                    return s.with_priority(SuggestionPriority::Optional);
                }
            }
            s
        })
        .collect()
}

/// Deduplicate on `(category, description)`; first occurrence wins.
pub fn dedupe(candidates: Vec<Suggestion>) -> Vec<Suggestion> {
    let mut seen: HashSet<(SuggestionCategory, String)> = HashSet::new();
    candidates
        .into_iter()
        .filter(|s| {
            let (category, description) = s.dedupe_key();
            seen.insert((category, description.to_string()))
        })
        .collect()
}

/// Stable sort: priority first, then the fixed category order. Ties keep
/// insertion order.
pub fn sort(mut candidates: Vec<Suggestion>) -> Vec<Suggestion> {
    candidates.sort_by_key(|s| (s.priority.sort_rank(), s.category.sort_rank()));
    candidates
}

/// Per-category cap. Critical entries are always retained and count
/// towards the category total for everything behind them.
pub fn cap(candidates: Vec<Suggestion>) -> Vec<Suggestion> {
    let mut counts: HashMap<SuggestionCategory, usize> = HashMap::new();
    candidates
        .into_iter()
        .filter(|s| {
            let count = counts.entry(s.category).or_default();
            if s.priority == SuggestionPriority::Critical || *count < CATEGORY_CAP {
                *count += 1;
                true
            } else {
                false
            }
        })
        .collect()
}
