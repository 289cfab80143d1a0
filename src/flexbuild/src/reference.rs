//! Reference key tables
//!
//! Hardcoded key tables for game concepts: characters, weapons, artifact
//! sets and slots, stats and elements. The wire schemas store these keys as
//! indices, so every table here is append-only.

mod artifact;
mod character;
mod element;
mod stat;
mod weapon;

pub use artifact::{ARTIFACT_SET_KEYS, MAX_ARTIFACT_LEVEL, MAX_RARITY, SLOT_KEYS};
pub use character::{is_character_key, CHARACTER_KEYS};
pub use element::{ELEMENT_KEYS, HIT_MODES, REACTION_MODES};
pub use stat::{is_percent_stat, STAT_KEYS, SUBSTAT_KEYS};
pub use weapon::{weapon_type_of, WeaponType, WEAPON_KEYS, WEAPON_TYPES};
