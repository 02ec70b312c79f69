//! Buildscope Analysis: deterministic rule-based scoring.
//!
//! Three independent classifiers (defensive, offensive, playstyle) and two
//! detectors (strengths, weaknesses) reduce a `ParsedBuild` to a
//! `BuildAnalysis`. All of them are total functions: any valid aggregate,
//! including the all-defaults case, yields a result, never an error.

pub mod defense;
pub mod keywords;
pub mod offense;
pub mod playstyle;
pub mod strengths;
pub mod weaknesses;

use buildscope_core::{BuildAnalysis, ParsedBuild};
use chrono::Utc;

pub use defense::{classify_defense, DefenseProfile, DefenseReport};
pub use offense::{classify_offense, OffenseReport};
pub use playstyle::{classify_playstyle, PlaystyleReport};

/// Analyze a parsed build. Deterministic apart from the timestamp.
pub fn analyze(build: &ParsedBuild) -> BuildAnalysis {
    let defense = classify_defense(build);
    let offense = classify_offense(build);
    let playstyle = classify_playstyle(build);

    tracing::debug!(
        defense = ?defense.rating,
        offense = ?offense.rating,
        playstyle = ?playstyle.playstyle,
        defense_evidence = ?defense.evidence,
        offense_evidence = ?offense.evidence,
        "classified build"
    );

    let strengths = strengths::detect_strengths(build);
    let mut weaknesses = weaknesses::detect_weaknesses(build, offense.rating);
    if weaknesses.is_empty() {
        weaknesses.push("No significant weaknesses detected".to_string());
    }

    BuildAnalysis {
        strengths,
        weaknesses,
        playstyle: playstyle.playstyle,
        defense: defense.rating,
        offense: offense.rating,
        analyzed_at: Utc::now(),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use buildscope_core::{DefenseRating, OffenseRating, PlaystyleType};

    #[test]
    fn all_defaults_build_gets_degenerate_but_valid_analysis() {
        let analysis = analyze(&testutil::empty_build());
        assert_eq!(analysis.defense, DefenseRating::GlassCannon);
        assert_eq!(analysis.offense, OffenseRating::Low);
        assert_eq!(analysis.playstyle, PlaystyleType::Unknown);
        assert!(!analysis.weaknesses.is_empty());
    }

    #[test]
    fn solid_build_gets_only_the_fallback_weakness() {
        let mut build = testutil::with_stats(&[
            ("Life", 5500.0),
            ("EnergyShield", 100.0),
            ("FireResistance", 76.0),
            ("ColdResistance", 76.0),
            ("LightningResistance", 76.0),
            ("ChaosResistance", 10.0),
            ("Armour", 12000.0),
            ("TotalDps", 800000.0),
            ("MovementSpeed", 30.0),
        ]);
        build.skills = vec![testutil::skill(
            "Earthquake",
            &["Melee Physical Damage", "Brutality", "Fist of War", "Pulverise", "Rage"],
            true,
        )];
        build.passives.nodes = vec![1, 2, 3];
        build.passives.point_count = 3;
        for slot in &mut build.gear {
            slot.name = "Some Item".into();
        }
        let analysis = analyze(&build);
        assert_eq!(analysis.defense, DefenseRating::UberViable);
        assert!(!analysis.strengths.is_empty());
        // Nothing genuine trips, so the fallback is the single entry.
        assert_eq!(
            analysis.weaknesses,
            vec!["No significant weaknesses detected"]
        );
    }
}
