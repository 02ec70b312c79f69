//! Utility suggestions: flasks, mobility, focus.

use buildscope_core::{
    BuildAnalysis, ParsedBuild, PlaystyleType, Suggestion, SuggestionCategory, SuggestionPriority,
};

const MOVEMENT_SKILLS: &[&str] = &[
    "dash",
    "blink",
    "leap slam",
    "shield charge",
    "whirling blades",
    "phase run",
    "smoke mine",
];

pub(crate) fn suggest_utility(build: &ParsedBuild, analysis: &BuildAnalysis) -> Vec<Suggestion> {
    let mut out = Vec::new();

    let flasks_used = build
        .gear
        .iter()
        .filter(|g| g.slot.is_flask() && !g.is_empty())
        .count();
    // The all-empty case already produces per-slot gear suggestions.
    if (1..5).contains(&flasks_used) {
        out.push(Suggestion::new(
            SuggestionCategory::Utility,
            SuggestionPriority::Optional,
            format!("Only {flasks_used} of 5 flask slots in use"),
            "Fill the remaining flask slots with utility flasks",
            "Flasks are outsized uptime-based power",
        ));
    }

    let has_movement_skill = build.skills.iter().any(|s| {
        let name = s.name.to_lowercase();
        MOVEMENT_SKILLS.iter().any(|m| name.contains(m))
    });
    if !build.skills.is_empty() && !has_movement_skill {
        out.push(Suggestion::new(
            SuggestionCategory::Utility,
            SuggestionPriority::Optional,
            "No movement skill detected",
            "Socket a movement skill such as Flame Dash or Shield Charge",
            "Faster mapping and better boss-mechanic dodging",
        ));
    }

    if analysis.playstyle == PlaystyleType::Unknown && !build.skills.is_empty() {
        out.push(Suggestion::new(
            SuggestionCategory::Utility,
            SuggestionPriority::Optional,
            "Build focus is unclear",
            "Commit supports and passives towards either clearing or single target",
            "Focused scaling beats split investment",
        ));
    }

    out
}
