//! Passive tree suggestions.

use buildscope_core::{
    BuildAnalysis, DefenseRating, ParsedBuild, Suggestion, SuggestionCategory, SuggestionPriority,
};

/// Points a character of this level could roughly have allocated
/// (level-ups plus quest rewards).
fn expected_points(level: u8) -> usize {
    level as usize + 12
}

pub(crate) fn suggest_passives(build: &ParsedBuild, analysis: &BuildAnalysis) -> Vec<Suggestion> {
    let mut out = Vec::new();
    let allocated = build.passives.point_count;

    if allocated == 0 {
        out.push(Suggestion::new(
            SuggestionCategory::Passives,
            SuggestionPriority::Critical,
            "No passives allocated",
            "Allocate passive points along a life or damage cluster path",
            "The tree is the largest single power source available",
        ));
    } else {
        let expected = expected_points(build.character.level);
        if allocated + 10 < expected {
            out.push(Suggestion::new(
                SuggestionCategory::Passives,
                SuggestionPriority::Important,
                format!(
                    "Only {allocated} of roughly {expected} passive points allocated at level {}",
                    build.character.level
                ),
                "Spend banked passive points",
                "Unused points are free power",
            ));
        }
        if build.passives.keystones.is_empty() {
            out.push(Suggestion::new(
                SuggestionCategory::Passives,
                SuggestionPriority::Optional,
                "No keystones allocated",
                "Consider a build-defining keystone that fits the damage type",
                "Keystones unlock whole scaling strategies",
            ));
        }
        if analysis.defense == DefenseRating::GlassCannon {
            out.push(Suggestion::new(
                SuggestionCategory::Passives,
                SuggestionPriority::Important,
                "Defensive passive investment is thin",
                "Path through nearby life and resistance nodes",
                "Raises effective life without gear changes",
            ));
        }
    }

    out
}
