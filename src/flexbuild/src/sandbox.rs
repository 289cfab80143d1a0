//! Rebuilding a throwaway store from a decoded payload.

use crate::database::{
    BuildDatabase, EntityStore, ARTIFACT_PREFIX, CHARACTER_PREFIX, DB_VERSION, DB_VERSION_KEY,
    WEAPON_PREFIX,
};
use crate::flex::FlexError;
use crate::model::FlexPayload;
use crate::storage::{SandboxStorage, Storage};

/// Populate a fresh [`SandboxStorage`] with the payload's entities and load
/// it through the regular store loader.
///
/// The weapon and every artifact are placed on the character, so the loader
/// rebuilds the character's equipment from them. Returns the store and the
/// character key.
pub fn materialize(
    payload: FlexPayload,
) -> Result<(BuildDatabase<SandboxStorage>, String), FlexError> {
    let FlexPayload {
        character: flex,
        artifacts,
    } = payload;
    let key = flex.character.key.clone();

    let mut storage = SandboxStorage::new();
    storage.set(DB_VERSION_KEY, DB_VERSION.to_string());

    let mut weapon = flex.weapon;
    weapon.location = key.clone();
    storage.set_json(&format!("{}1", WEAPON_PREFIX), &weapon)?;

    storage.set_json(&format!("{}{}", CHARACTER_PREFIX, key), &flex.character)?;

    for (i, mut artifact) in artifacts.into_iter().enumerate() {
        artifact.location = key.clone();
        storage.set_json(&format!("{}{}", ARTIFACT_PREFIX, i + 1), &artifact)?;
    }

    let database = BuildDatabase::new(storage)
        .map_err(|e| FlexError::InvalidFlexObject(e.to_string()))?;

    if database.get_character(&key).is_none() {
        return Err(FlexError::InvalidFlexObject(format!(
            "character {:?} did not survive loading",
            key
        )));
    }

    Ok((database, key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Artifact, Character, FlexCharacter, SlotKey, Substat, Weapon};

    fn artifact(slot: SlotKey) -> Artifact {
        Artifact {
            set_key: "GladiatorsFinale".into(),
            slot_key: slot,
            level: 20,
            rarity: 5,
            main_stat_key: "atk".into(),
            substats: vec![Substat {
                key: "critDMG_".into(),
                value: 14.0,
            }],
            location: String::new(),
            lock: false,
            exclude: false,
        }
    }

    fn payload(key: &str, artifacts: Vec<Artifact>) -> FlexPayload {
        FlexPayload {
            character: FlexCharacter {
                character: Character::new(key),
                weapon: Weapon {
                    key: "FavoniusSword".into(),
                    level: 70,
                    ascension: 4,
                    refinement: 5,
                    location: "Somebody".into(),
                    lock: true,
                },
            },
            artifacts,
        }
    }

    #[test]
    fn test_materialize_equips_everything() {
        let (db, key) = materialize(payload(
            "Bennett",
            vec![artifact(SlotKey::Flower), artifact(SlotKey::Circlet)],
        ))
        .unwrap();

        assert_eq!(key, "Bennett");
        let bennett = db.get_character("Bennett").unwrap();
        assert_eq!(bennett.equipped_weapon, "weapon_1");
        assert_eq!(db.get_weapon("weapon_1").unwrap().location, "Bennett");
        assert_eq!(bennett.equipped_artifacts.get(SlotKey::Flower), Some("artifact_1"));
        assert_eq!(bennett.equipped_artifacts.get(SlotKey::Circlet), Some("artifact_2"));
        assert_eq!(db.storage().get(DB_VERSION_KEY), Some("8"));
    }

    #[test]
    fn test_duplicate_slot_is_orphaned() {
        let (db, _) = materialize(payload(
            "Bennett",
            vec![artifact(SlotKey::Flower), artifact(SlotKey::Flower)],
        ))
        .unwrap();

        let bennett = db.get_character("Bennett").unwrap();
        assert_eq!(bennett.equipped_artifacts.get(SlotKey::Flower), Some("artifact_1"));
        assert_eq!(db.get_artifact("artifact_2").unwrap().location, "");
        assert_eq!(db.artifacts().count(), 2);
    }

    #[test]
    fn test_unloadable_character_is_rejected() {
        let err = materialize(payload("", Vec::new())).unwrap_err();
        assert!(matches!(err, FlexError::InvalidFlexObject(_)));
    }
}
