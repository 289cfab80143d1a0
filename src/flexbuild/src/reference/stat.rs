//! Stat keys
//!
//! Keys ending in `_` are percentage stats; the rest are flat values.

/// Every stat key that can appear as an artifact main stat or a base-stat
/// override, in wire order. Append only.
pub const STAT_KEYS: &[&str] = &[
    "hp",
    "hp_",
    "atk",
    "atk_",
    "def",
    "def_",
    "eleMas",
    "enerRech_",
    "critRate_",
    "critDMG_",
    "heal_",
    "physical_dmg_",
    "anemo_dmg_",
    "geo_dmg_",
    "electro_dmg_",
    "hydro_dmg_",
    "pyro_dmg_",
    "cryo_dmg_",
];

/// Stat keys that can roll as artifact substats, in wire order
pub const SUBSTAT_KEYS: &[&str] = &[
    "hp",
    "hp_",
    "atk",
    "atk_",
    "def",
    "def_",
    "eleMas",
    "enerRech_",
    "critRate_",
    "critDMG_",
];

/// Check whether a stat key is a percentage stat
pub fn is_percent_stat(key: &str) -> bool {
    key.ends_with('_')
}
