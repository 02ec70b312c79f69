//! Canonical stat names shared by the extractors and classifiers.

pub const LIFE: &str = "Life";
pub const ENERGY_SHIELD: &str = "EnergyShield";
pub const FIRE_RESISTANCE: &str = "FireResistance";
pub const COLD_RESISTANCE: &str = "ColdResistance";
pub const LIGHTNING_RESISTANCE: &str = "LightningResistance";
pub const CHAOS_RESISTANCE: &str = "ChaosResistance";
pub const ARMOUR: &str = "Armour";
pub const EVASION: &str = "Evasion";
pub const MOVEMENT_SPEED: &str = "MovementSpeed";
pub const CRIT_CHANCE: &str = "CritChance";
pub const TOTAL_DPS: &str = "TotalDps";

/// Stats the extractor materialises (at zero, provenance "estimated") when
/// the source document carries no stat section at all, so downstream
/// consumers always find predictable keys.
pub const DEFAULT_DEFENSIVE_STATS: [&str; 6] = [
    LIFE,
    ENERGY_SHIELD,
    FIRE_RESISTANCE,
    COLD_RESISTANCE,
    LIGHTNING_RESISTANCE,
    CHAOS_RESISTANCE,
];
