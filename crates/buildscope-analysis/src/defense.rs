//! Defensive classifier.

use buildscope_core::{DefenseRating, ParsedBuild};
use buildscope_data::stat_names;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LIFE_AFFIX: Regex = Regex::new(r"(?i)to maximum life\b").expect("life pattern");
    static ref ES_AFFIX: Regex =
        Regex::new(r"(?i)to maximum energy shield\b").expect("energy shield pattern");
}

/// Defensive numbers pulled out of the aggregate.
#[derive(Debug, Clone)]
pub struct DefenseProfile {
    pub life: f64,
    pub energy_shield: f64,
    pub fire_res: f64,
    pub cold_res: f64,
    pub lightning_res: f64,
    pub chaos_res: f64,
    pub armour: f64,
    pub evasion: f64,
    pub chaos_immune: bool,
}

impl DefenseProfile {
    /// Health-equivalent pool used for classification: energy shield alone
    /// under chaos immunity, otherwise the larger of life and ES.
    pub fn effective_life(&self) -> f64 {
        if self.chaos_immune {
            self.energy_shield
        } else {
            self.life.max(self.energy_shield)
        }
    }

    pub fn min_elemental_res(&self) -> f64 {
        self.fire_res.min(self.cold_res).min(self.lightning_res)
    }

    pub fn all_elemental_capped(&self) -> bool {
        self.fire_res >= 75.0 && self.cold_res >= 75.0 && self.lightning_res >= 75.0
    }
}

#[derive(Debug, Clone)]
pub struct DefenseReport {
    pub rating: DefenseRating,
    pub profile: DefenseProfile,
    pub evidence: Vec<String>,
}

/// Sum of leading affix values whose text matches `pattern`, across all
/// equipped gear.
fn gear_affix_sum(build: &ParsedBuild, pattern: &Regex) -> f64 {
    build
        .gear
        .iter()
        .flat_map(|slot| &slot.affixes)
        .filter(|affix| pattern.is_match(&affix.text))
        .filter_map(|affix| affix.value)
        .sum()
}

/// Extract the defensive profile, falling back to a best-effort gear scan
/// for life and energy shield when the explicit stats are zero.
pub fn defense_profile(build: &ParsedBuild) -> DefenseProfile {
    let mut life = build.stat(stat_names::LIFE).unwrap_or(0.0);
    let mut energy_shield = build.stat(stat_names::ENERGY_SHIELD).unwrap_or(0.0);
    if life == 0.0 {
        life = gear_affix_sum(build, &LIFE_AFFIX);
    }
    if energy_shield == 0.0 {
        energy_shield = gear_affix_sum(build, &ES_AFFIX);
    }

    DefenseProfile {
        life,
        energy_shield,
        fire_res: build.stat(stat_names::FIRE_RESISTANCE).unwrap_or(0.0),
        cold_res: build.stat(stat_names::COLD_RESISTANCE).unwrap_or(0.0),
        lightning_res: build.stat(stat_names::LIGHTNING_RESISTANCE).unwrap_or(0.0),
        chaos_res: build.stat(stat_names::CHAOS_RESISTANCE).unwrap_or(0.0),
        armour: build.stat(stat_names::ARMOUR).unwrap_or(0.0),
        evasion: build.stat(stat_names::EVASION).unwrap_or(0.0),
        chaos_immune: build.has_keystone("Chaos Inoculation"),
    }
}

/// Classify defenses. The arms are evaluated in strict order; the first
/// match wins.
pub fn classify_defense(build: &ParsedBuild) -> DefenseReport {
    let profile = defense_profile(build);
    let ehp = profile.effective_life();

    let rating = if ehp > 5000.0
        && profile.all_elemental_capped()
        && (profile.armour > 10000.0 || profile.evasion > 10000.0)
    {
        DefenseRating::UberViable
    } else if ehp > 4000.0 && profile.all_elemental_capped() {
        DefenseRating::Tanky
    } else if ehp > 2500.0 && profile.min_elemental_res() >= 50.0 {
        DefenseRating::Moderate
    } else {
        DefenseRating::GlassCannon
    };

    let mut evidence = vec![
        format!("effective life pool {ehp:.0}"),
        format!(
            "elemental resistances {:.0}/{:.0}/{:.0}",
            profile.fire_res, profile.cold_res, profile.lightning_res
        ),
    ];
    if profile.chaos_immune {
        evidence.push("chaos immunity: effective life is energy shield alone".to_string());
    }
    if profile.armour > 10000.0 {
        evidence.push(format!("high armour ({:.0})", profile.armour));
    }
    if profile.evasion > 10000.0 {
        evidence.push(format!("high evasion ({:.0})", profile.evasion));
    }

    DefenseReport {
        rating,
        profile,
        evidence,
    }
}
