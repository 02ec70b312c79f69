//! Offensive classifier: dominant damage type and DPS rating.

use buildscope_core::{OffenseRating, ParsedBuild};
use buildscope_data::{stat_names, KeywordTable};
use lazy_static::lazy_static;
use regex::Regex;

use crate::keywords::score_weighted;

const ELEMENTS: [&str; 3] = ["fire", "cold", "lightning"];

lazy_static! {
    static ref ADDED_DAMAGE: Regex =
        Regex::new(r"(?i)adds (\d+(?:\.\d+)?) to (\d+(?:\.\d+)?)").expect("added-damage pattern");
    static ref INCREASED_DAMAGE: Regex =
        Regex::new(r"(?i)(\d+(?:\.\d+)?)% increased [^,]*damage").expect("increased pattern");
}

#[derive(Debug, Clone)]
pub struct OffenseReport {
    pub rating: OffenseRating,
    /// Dominant damage type, or `None` when nothing matched.
    pub damage_type: Option<String>,
    pub dps: f64,
    /// True when no explicit DPS stat existed and the synthetic estimate
    /// was used.
    pub estimated: bool,
    pub evidence: Vec<String>,
}

/// Dominant damage type from weighted keyword counts: skill names at full
/// weight, support names at half.
///
/// When two or more of fire/cold/lightning tie for the maximum and the
/// three together total at least 2, the result is the generic elemental
/// category rather than any single element.
fn dominant_damage_type(build: &ParsedBuild) -> Option<String> {
    let texts = build
        .skills
        .iter()
        .map(|s| (s.name.as_str(), 1.0))
        .chain(
            build
                .skills
                .iter()
                .flat_map(|s| &s.supports)
                .map(|g| (g.name.as_str(), 0.5)),
        );
    let scores = score_weighted(KeywordTable::damage_types(), texts);

    let max = scores.values().cloned().fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return None;
    }

    let elemental_total: f64 = ELEMENTS
        .iter()
        .filter_map(|e| scores.get(*e))
        .sum();
    let elements_at_max = ELEMENTS
        .iter()
        .filter(|e| scores.get(**e).is_some_and(|s| (s - max).abs() < f64::EPSILON))
        .count();
    if elements_at_max >= 2 && elemental_total >= 2.0 {
        return Some("elemental".to_string());
    }

    scores
        .into_iter()
        .filter(|(_, score)| (score - max).abs() < f64::EPSILON)
        .map(|(category, _)| category)
        .min() // deterministic pick when non-element categories tie
}

/// Synthetic DPS estimate used when the document declares no DPS stat.
///
/// base 1000 + 10x flat added damage from gear, scaled by summed
/// %-increased damage, a running product of support "more" multipliers
/// (1.2x, or 1.4x for Awakened gems), and a level factor.
fn estimate_dps(build: &ParsedBuild) -> f64 {
    let mut flat = 0.0;
    let mut increased = 0.0;
    for affix in build.gear.iter().flat_map(|g| &g.affixes) {
        if let Some(caps) = ADDED_DAMAGE.captures(&affix.text) {
            let low: f64 = caps[1].parse().unwrap_or(0.0);
            let high: f64 = caps[2].parse().unwrap_or(0.0);
            flat += (low + high) / 2.0;
        }
        if let Some(caps) = INCREASED_DAMAGE.captures(&affix.text) {
            increased += caps[1].parse().unwrap_or(0.0);
        }
    }

    let mut more = 1.0;
    if let Some(main) = build.main_skill() {
        let supports = KeywordTable::damage_supports();
        for gem in &main.supports {
            if supports.matches(&gem.name).next().is_some() {
                more *= if gem.name.to_lowercase().starts_with("awakened") {
                    1.4
                } else {
                    1.2
                };
            }
        }
    }

    let level_mult = 1.0 + (build.character.level.saturating_sub(1) as f64) * 0.05;
    (1000.0 + 10.0 * flat) * (1.0 + increased / 100.0) * more * level_mult
}

pub fn classify_offense(build: &ParsedBuild) -> OffenseReport {
    let damage_type = dominant_damage_type(build);

    let declared = build.stat(stat_names::TOTAL_DPS).filter(|v| *v > 0.0);
    let estimated = declared.is_none();
    let dps = declared.unwrap_or_else(|| estimate_dps(build));

    let rating = if dps < 100_000.0 {
        OffenseRating::Low
    } else if dps < 500_000.0 {
        OffenseRating::Moderate
    } else if dps < 1_000_000.0 {
        OffenseRating::High
    } else {
        OffenseRating::Extreme
    };

    let mut evidence = vec![format!(
        "{} DPS {dps:.0}",
        if estimated { "estimated" } else { "declared" }
    )];
    if let Some(ref t) = damage_type {
        evidence.push(format!("dominant damage type: {t}"));
    }

    OffenseReport {
        rating,
        damage_type,
        dps,
        estimated,
        evidence,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{empty_build, skill, with_stats};
    use buildscope_core::{Affix, AffixKind};

    #[test]
    fn declared_dps_drives_the_rating() {
        for (dps, expected) in [
            (99_999.0, OffenseRating::Low),
            (100_000.0, OffenseRating::Moderate),
            (499_999.0, OffenseRating::Moderate),
            (500_000.0, OffenseRating::High),
            (999_999.0, OffenseRating::High),
            (1_000_000.0, OffenseRating::Extreme),
        ] {
            let report = classify_offense(&with_stats(&[("TotalDps", dps)]));
            assert_eq!(report.rating, expected, "dps {dps}");
            assert!(!report.estimated);
        }
    }

    #[test]
    fn empty_build_estimates_low() {
        let report = classify_offense(&empty_build());
        assert!(report.estimated);
        assert_eq!(report.rating, OffenseRating::Low);
        assert_eq!(report.dps, 1000.0);
        assert!(report.damage_type.is_none());
    }

    #[test]
    fn single_dominant_element_is_reported() {
        let mut build = empty_build();
        build.skills = vec![skill("Fireball", &["Ignite Proliferation"], true)];
        let report = classify_offense(&build);
        assert_eq!(report.damage_type.as_deref(), Some("fire"));
    }

    #[test]
    fn tied_elements_collapse_to_elemental() {
        let mut build = empty_build();
        build.skills = vec![
            skill("Fireball", &[], true),
            skill("Glacial Cascade", &[], false),
        ];
        let report = classify_offense(&build);
        assert_eq!(report.damage_type.as_deref(), Some("elemental"));
    }

    #[test]
    fn tied_elements_below_total_threshold_stay_specific() {
        let mut build = empty_build();
        // Fire and cold tie at 0.5 via supports; total 1.0 is below the
        // elemental threshold of 2.
        build.skills = vec![skill("Cleave", &["Added Fire Damage", "Added Cold Damage"], true)];
        let report = classify_offense(&build);
        assert_ne!(report.damage_type.as_deref(), Some("elemental"));
    }

    #[test]
    fn estimate_combines_flat_increased_more_and_level() {
        let mut build = empty_build();
        build.character.level = 21; // level multiplier 2.0
        build.skills = vec![skill("Boneshatter", &["Melee Physical Damage"], true)];
        build.gear[0].name = "Axe".into();
        build.gear[0].affixes = vec![
            Affix {
                kind: AffixKind::Explicit,
                text: "Adds 10 to 30 Physical Damage".into(),
                value: None,
                unparsed: true,
            },
            Affix {
                kind: AffixKind::Explicit,
                text: "50% increased Physical Damage".into(),
                value: Some(50.0),
                unparsed: false,
            },
        ];
        let report = classify_offense(&build);
        // (1000 + 10*20) * 1.5 * 1.2 * 2.0 = 4320
        assert!((report.dps - 4320.0).abs() < 1e-6, "got {}", report.dps);
    }

    #[test]
    fn awakened_supports_use_the_larger_factor() {
        let mut build = empty_build();
        build.skills = vec![skill("Cyclone", &["Awakened Melee Physical Damage"], true)];
        let report = classify_offense(&build);
        assert!((report.dps - 1400.0).abs() < 1e-6, "got {}", report.dps);
    }
}
