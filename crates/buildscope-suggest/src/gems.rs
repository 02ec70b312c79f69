//! Gem suggestions: main-skill links, gem levels, quality.

use buildscope_core::{
    BuildAnalysis, OffenseRating, ParsedBuild, Suggestion, SuggestionCategory, SuggestionPriority,
};

pub(crate) fn suggest_gems(build: &ParsedBuild, analysis: &BuildAnalysis) -> Vec<Suggestion> {
    let mut out = Vec::new();

    match build.main_skill() {
        None => {
            out.push(Suggestion::new(
                SuggestionCategory::Gems,
                SuggestionPriority::Critical,
                "Build has no main damage skill",
                "Socket a primary damage skill and link supports to it",
                "Enables every other damage improvement",
            ));
        }
        Some(main) => {
            if main.supports.is_empty() {
                out.push(Suggestion::new(
                    SuggestionCategory::Gems,
                    SuggestionPriority::Important,
                    format!("Main skill {} has no supports", main.name),
                    format!("Link {} with damage support gems", main.name),
                    "Each support is a large multiplicative damage gain",
                ));
            } else if main.link_count < 5 {
                out.push(Suggestion::new(
                    SuggestionCategory::Gems,
                    SuggestionPriority::Important,
                    format!(
                        "Main skill {} runs in only a {}-link",
                        main.name, main.link_count
                    ),
                    "Work towards a 5- or 6-link for the main skill",
                    "20-40% more damage per added support",
                ));
            }
            if main.level < 18 {
                out.push(Suggestion::new(
                    SuggestionCategory::Gems,
                    SuggestionPriority::Optional,
                    format!("{} is underleveled (gem level {})", main.name, main.level),
                    "Level the main skill gem to 20",
                    "Steady damage growth per gem level",
                ));
            }
            if main.quality < 20 {
                out.push(Suggestion::new(
                    SuggestionCategory::Gems,
                    SuggestionPriority::Optional,
                    format!("{} has {}% quality", main.name, main.quality),
                    "Raise the main skill gem to 20% quality",
                    "Minor but cheap damage or utility gain",
                ));
            }
        }
    }

    if analysis.offense == OffenseRating::Low && build.main_skill().is_some() {
        out.push(Suggestion::new(
            SuggestionCategory::Gems,
            SuggestionPriority::Important,
            "Damage output is low for the current gem setup",
            "Swap weaker supports for dedicated damage multipliers",
            "Moves the build up a damage tier",
        ));
    }

    out
}
