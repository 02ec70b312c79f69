//! Strength detector: qualitative positives, insertion order.

use buildscope_core::ParsedBuild;
use buildscope_data::stat_names;

use crate::defense::defense_profile;

pub fn detect_strengths(build: &ParsedBuild) -> Vec<String> {
    let mut strengths = Vec::new();
    let profile = defense_profile(build);

    let ehp = profile.effective_life();
    if ehp > 5000.0 {
        strengths.push(format!("Large effective life pool ({ehp:.0})"));
    }
    if profile.all_elemental_capped() {
        strengths.push("All elemental resistances capped".to_string());
    }
    if profile.chaos_immune {
        strengths.push("Immune to chaos damage (Chaos Inoculation)".to_string());
    }
    if profile.armour > 10000.0 || profile.evasion > 10000.0 {
        strengths.push("Strong physical mitigation layer".to_string());
    }

    if let Some(main) = build.main_skill() {
        if main.link_count >= 6 {
            strengths.push(format!("{} runs in a {}-link", main.name, main.link_count));
        }
    }

    if build.passives.keystones.len() >= 2 {
        let names: Vec<_> = build
            .passives
            .keystones
            .iter()
            .map(|k| k.name.as_str())
            .collect();
        strengths.push(format!("Build-defining keystones: {}", names.join(", ")));
    }

    if build.stat(stat_names::MOVEMENT_SPEED).unwrap_or(0.0) > 20.0 {
        strengths.push("Good movement speed".to_string());
    }

    strengths
}
