//! Protocol version 2.
//!
//! Store-local identifiers (`equippedWeapon`, `equippedArtifacts`,
//! `location`, `lock`, `exclude`) are not on the wire. The reconstructing
//! store derives equipment again from the entities it is given.

use super::Schema;
use crate::reference::{
    ARTIFACT_SET_KEYS, CHARACTER_KEYS, ELEMENT_KEYS, HIT_MODES, REACTION_MODES, SLOT_KEYS,
    STAT_KEYS, SUBSTAT_KEYS, WEAPON_KEYS,
};

const TALENT_LEVEL: Schema = Schema::Uint { bits: 4 };
const STAT_KEY: Schema = Schema::Enum(STAT_KEYS);
const ELEMENT: Schema = Schema::Enum(ELEMENT_KEYS);

const TALENT: Schema = Schema::Object(&[
    ("auto", TALENT_LEVEL),
    ("skill", TALENT_LEVEL),
    ("burst", TALENT_LEVEL),
]);

const SET_FILTER: Schema = Schema::Object(&[("key", Schema::Str), ("num", Schema::Uint { bits: 3 })]);

const MAIN_STAT_KEYS: Schema = Schema::Object(&[
    ("sands", Schema::Array(&STAT_KEY)),
    ("goblet", Schema::Array(&STAT_KEY)),
    ("circlet", Schema::Array(&STAT_KEY)),
]);

const BUILD_SETTINGS: Schema = Schema::Object(&[
    ("setFilters", Schema::Array(&SET_FILTER)),
    (
        "statFilters",
        Schema::Map {
            key: &STAT_KEY,
            value: &Schema::Decimal { scale: 10 },
        },
    ),
    ("mainStatKeys", MAIN_STAT_KEYS),
    ("optimizationTarget", Schema::Array(&Schema::Str)),
    ("mainStatAssumptionLevel", Schema::Uint { bits: 5 }),
    ("useExcludedArts", Schema::Bool),
    ("useEquippedArts", Schema::Bool),
]);

/// Weapon embedded in the character record
pub const WEAPON: Schema = Schema::Object(&[
    ("key", Schema::Enum(WEAPON_KEYS)),
    ("level", Schema::Uint { bits: 7 }),
    ("ascension", Schema::Uint { bits: 3 }),
    ("refinement", Schema::Uint { bits: 3 }),
]);

/// Character with its weapon embedded
pub const CHARACTER: Schema = Schema::Object(&[
    ("key", Schema::Enum(CHARACTER_KEYS)),
    ("level", Schema::Uint { bits: 7 }),
    ("ascension", Schema::Uint { bits: 3 }),
    ("constellation", Schema::Uint { bits: 3 }),
    ("talent", TALENT),
    ("hitMode", Schema::Enum(HIT_MODES)),
    ("elementKey", Schema::Optional(&ELEMENT)),
    ("reactionMode", Schema::Optional(&Schema::Enum(REACTION_MODES))),
    ("infusionAura", Schema::Optional(&ELEMENT)),
    (
        "conditionalValues",
        Schema::Map {
            key: &Schema::Str,
            value: &Schema::Str,
        },
    ),
    (
        "baseStatOverrides",
        Schema::Map {
            key: &STAT_KEY,
            value: &Schema::Decimal { scale: 100 },
        },
    ),
    ("buildSettings", BUILD_SETTINGS),
    ("weapon", WEAPON),
]);

const SUBSTAT: Schema = Schema::Object(&[
    ("key", Schema::Enum(SUBSTAT_KEYS)),
    ("value", Schema::Decimal { scale: 10 }),
]);

/// One artifact
pub const ARTIFACT: Schema = Schema::Object(&[
    ("setKey", Schema::Enum(ARTIFACT_SET_KEYS)),
    ("slotKey", Schema::Enum(SLOT_KEYS)),
    ("level", Schema::Uint { bits: 5 }),
    ("rarity", Schema::Uint { bits: 3 }),
    ("mainStatKey", STAT_KEY),
    ("substats", Schema::Array(&SUBSTAT)),
]);

/// The whole flex payload
pub static FLEX: Schema = Schema::Object(&[
    ("character", CHARACTER),
    ("artifacts", Schema::Array(&ARTIFACT)),
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_layout() {
        let Schema::Object(fields) = FLEX else {
            panic!("flex payload must be an object");
        };
        let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["character", "artifacts"]);
    }

    #[test]
    fn test_store_local_fields_stay_off_the_wire() {
        for local in ["equippedWeapon", "equippedArtifacts"] {
            assert!(CHARACTER.field(local).is_none(), "{}", local);
        }
        assert!(WEAPON.field("location").is_none());
        assert!(ARTIFACT.field("location").is_none());
        assert!(ARTIFACT.field("lock").is_none());
    }

    #[test]
    fn test_weapon_keys_fit_seven_bits() {
        assert!(WEAPON_KEYS.len() <= 128);
    }
}
