//! Gear suggestions: empty slots and resistance gaps.

use buildscope_analysis::defense::defense_profile;
use buildscope_core::{
    BuildAnalysis, ParsedBuild, Suggestion, SuggestionCategory, SuggestionPriority,
};

pub(crate) fn suggest_gear(build: &ParsedBuild, _analysis: &BuildAnalysis) -> Vec<Suggestion> {
    let mut out = Vec::new();

    for slot in build.empty_slots() {
        let label = slot.slot.label();
        out.push(Suggestion::new(
            SuggestionCategory::Gear,
            SuggestionPriority::Important,
            format!("{label} slot is empty"),
            format!("Equip any reasonable item in the {label} slot"),
            "Even a basic item adds life, resistances or damage",
        ));
    }

    let profile = defense_profile(build);
    for (name, value) in [
        ("fire", profile.fire_res),
        ("cold", profile.cold_res),
        ("lightning", profile.lightning_res),
    ] {
        if value < 75.0 {
            out.push(Suggestion::new(
                SuggestionCategory::Gear,
                SuggestionPriority::Important,
                format!("Uncapped {name} resistance ({value:.0}% of 75% cap)"),
                format!("Add {name} resistance rolls on gear"),
                format!("Large survivability gain against {name} damage"),
            ));
        }
    }
    if !profile.chaos_immune && profile.chaos_res < -30.0 {
        out.push(Suggestion::new(
            SuggestionCategory::Gear,
            SuggestionPriority::Optional,
            format!(
                "Chaos resistance is deeply negative ({:.0}%)",
                profile.chaos_res
            ),
            "Pick up chaos resistance on jewellery or the belt",
            "Softens chaos damage spikes",
        ));
    }

    if profile.life > 0.0 && profile.life < 300.0 && !build.gear.iter().all(|g| g.is_empty()) {
        out.push(Suggestion::new(
            SuggestionCategory::Gear,
            SuggestionPriority::Important,
            "Gear contributes almost no life",
            "Prioritize life rolls on every rare item",
            "Life on gear compounds with tree percentages",
        ));
    }

    out
}
