//! Weakness detector: qualitative deficiencies, insertion order.

use buildscope_core::{OffenseRating, ParsedBuild};

use crate::defense::defense_profile;

/// The offense rating comes in from the caller; the detector never re-runs
/// the classifier itself.
pub fn detect_weaknesses(build: &ParsedBuild, offense: OffenseRating) -> Vec<String> {
    let mut weaknesses = Vec::new();
    let profile = defense_profile(build);

    for (name, value) in [
        ("fire", profile.fire_res),
        ("cold", profile.cold_res),
        ("lightning", profile.lightning_res),
    ] {
        if value < 75.0 {
            weaknesses.push(format!("Uncapped {name} resistance ({value:.0}% of 75% cap)"));
        }
    }
    if !profile.chaos_immune && profile.chaos_res < -30.0 {
        weaknesses.push(format!(
            "Very low chaos resistance ({:.0}%)",
            profile.chaos_res
        ));
    }

    let ehp = profile.effective_life();
    if ehp < 2500.0 {
        weaknesses.push(format!("Dangerously low life pool ({ehp:.0})"));
    }

    match build.main_skill() {
        None => weaknesses.push("No main damage skill configured".to_string()),
        Some(main) if main.supports.is_empty() => {
            weaknesses.push(format!("Main skill {} has no supports", main.name));
        }
        Some(_) => {}
    }

    let empty = build.empty_slots().count();
    if empty > 0 {
        weaknesses.push(format!("{empty} equipment slots are empty"));
    }

    if build.passives.point_count == 0 {
        weaknesses.push("No passives allocated".to_string());
    }

    if offense == OffenseRating::Low {
        weaknesses.push("Low damage output".to_string());
    }

    weaknesses
}
