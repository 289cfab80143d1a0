//! Character, weapon and artifact records.
//!
//! Field names follow the camelCase JSON the stores hold, which is also the
//! shape the wire schemas describe.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Artifact equipment slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKey {
    Flower,
    Plume,
    Sands,
    Goblet,
    Circlet,
}

impl SlotKey {
    /// All slots in display order
    pub const ALL: [SlotKey; 5] = [
        SlotKey::Flower,
        SlotKey::Plume,
        SlotKey::Sands,
        SlotKey::Goblet,
        SlotKey::Circlet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SlotKey::Flower => "flower",
            SlotKey::Plume => "plume",
            SlotKey::Sands => "sands",
            SlotKey::Goblet => "goblet",
            SlotKey::Circlet => "circlet",
        }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Artifact id per slot; an empty string is an empty slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquippedArtifacts {
    #[serde(default)]
    pub flower: String,
    #[serde(default)]
    pub plume: String,
    #[serde(default)]
    pub sands: String,
    #[serde(default)]
    pub goblet: String,
    #[serde(default)]
    pub circlet: String,
}

impl EquippedArtifacts {
    /// Artifact id in `slot`, if the slot is filled
    pub fn get(&self, slot: SlotKey) -> Option<&str> {
        let id = match slot {
            SlotKey::Flower => &self.flower,
            SlotKey::Plume => &self.plume,
            SlotKey::Sands => &self.sands,
            SlotKey::Goblet => &self.goblet,
            SlotKey::Circlet => &self.circlet,
        };
        (!id.is_empty()).then_some(id.as_str())
    }

    pub fn set(&mut self, slot: SlotKey, id: impl Into<String>) {
        let id = id.into();
        match slot {
            SlotKey::Flower => self.flower = id,
            SlotKey::Plume => self.plume = id,
            SlotKey::Sands => self.sands = id,
            SlotKey::Goblet => self.goblet = id,
            SlotKey::Circlet => self.circlet = id,
        }
    }

    /// Filled slots in display order
    pub fn iter(&self) -> impl Iterator<Item = (SlotKey, &str)> {
        SlotKey::ALL
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|id| (slot, id)))
    }
}

/// Damage display mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HitMode {
    #[default]
    AvgHit,
    Hit,
    CritHit,
}

/// Talent levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Talent {
    pub auto: u8,
    pub skill: u8,
    pub burst: u8,
}

impl Default for Talent {
    fn default() -> Self {
        Self {
            auto: 1,
            skill: 1,
            burst: 1,
        }
    }
}

/// Required count of pieces from one artifact set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetFilter {
    pub key: String,
    pub num: u8,
}

/// Main stats the optimizer may pick per variable slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainStatKeys {
    #[serde(default)]
    pub sands: Vec<String>,
    #[serde(default)]
    pub goblet: Vec<String>,
    #[serde(default)]
    pub circlet: Vec<String>,
}

/// Build optimizer settings saved with the character
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildSettings {
    #[serde(default)]
    pub set_filters: Vec<SetFilter>,
    #[serde(default)]
    pub stat_filters: BTreeMap<String, f64>,
    #[serde(default)]
    pub main_stat_keys: MainStatKeys,
    #[serde(default)]
    pub optimization_target: Vec<String>,
    #[serde(default)]
    pub main_stat_assumption_level: u8,
    #[serde(default)]
    pub use_excluded_arts: bool,
    #[serde(default)]
    pub use_equipped_arts: bool,
}

/// A character record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub key: String,
    pub level: u32,
    pub ascension: u8,
    #[serde(default)]
    pub constellation: u8,
    #[serde(default)]
    pub talent: Talent,
    #[serde(default)]
    pub hit_mode: HitMode,
    /// Chosen element, for characters that can switch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reaction_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub infusion_aura: Option<String>,
    /// Conditional toggles keyed by their path
    #[serde(default)]
    pub conditional_values: BTreeMap<String, String>,
    #[serde(default)]
    pub base_stat_overrides: BTreeMap<String, f64>,
    #[serde(default)]
    pub build_settings: BuildSettings,
    /// Store-local weapon id, empty when unarmed
    #[serde(default)]
    pub equipped_weapon: String,
    #[serde(default)]
    pub equipped_artifacts: EquippedArtifacts,
}

impl Character {
    /// A fresh level-1 character
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            level: 1,
            ascension: 0,
            constellation: 0,
            talent: Talent::default(),
            hit_mode: HitMode::default(),
            element_key: None,
            reaction_mode: None,
            infusion_aura: None,
            conditional_values: BTreeMap::new(),
            base_stat_overrides: BTreeMap::new(),
            build_settings: BuildSettings::default(),
            equipped_weapon: String::new(),
            equipped_artifacts: EquippedArtifacts::default(),
        }
    }
}

/// A weapon record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub key: String,
    pub level: u32,
    pub ascension: u8,
    pub refinement: u8,
    /// Key of the character holding it, empty when unequipped
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub lock: bool,
}

/// One rolled substat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substat {
    pub key: String,
    pub value: f64,
}

/// An artifact record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub set_key: String,
    pub slot_key: SlotKey,
    pub level: u8,
    pub rarity: u8,
    pub main_stat_key: String,
    #[serde(default)]
    pub substats: Vec<Substat>,
    /// Key of the character wearing it, empty when unequipped
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub lock: bool,
    #[serde(default)]
    pub exclude: bool,
}

/// Character with its weapon embedded, as carried on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlexCharacter {
    #[serde(flatten)]
    pub character: Character,
    pub weapon: Weapon,
}

/// The unit a share string carries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlexPayload {
    pub character: FlexCharacter,
    #[serde(default)]
    pub artifacts: Vec<Artifact>,
}
