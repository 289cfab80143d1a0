//! Character, weapon and artifact store loaded from a [`Storage`].
//!
//! Loading is also validation: unreadable records are dropped, and equipment
//! is rebuilt from each weapon's and artifact's `location`, so every
//! cross-reference a [`BuildDatabase`] hands out resolves. The same loader
//! backs the persistent store and every reconstructed share.

use std::collections::BTreeMap;

use crate::model::{Artifact, Character, Weapon};
use crate::storage::Storage;

/// Store format version this loader reads
pub const DB_VERSION: u32 = 8;

/// Storage key holding the store format version
pub const DB_VERSION_KEY: &str = "db_ver";

pub const CHARACTER_PREFIX: &str = "char_";
pub const WEAPON_PREFIX: &str = "weapon_";
pub const ARTIFACT_PREFIX: &str = "artifact_";

#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("store format {found:?} predates version {expected} and must be migrated first")]
    LegacyFormat { found: Option<u32>, expected: u32 },

    #[error("store format version {found} is newer than supported version {supported}")]
    NewerFormat { found: u32, supported: u32 },

    #[error("failed to write record {key}: {source}")]
    Json {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Read access to characters, weapons and artifacts
pub trait EntityStore {
    fn get_character(&self, key: &str) -> Option<&Character>;

    fn get_weapon(&self, id: &str) -> Option<&Weapon>;

    fn get_artifact(&self, id: &str) -> Option<&Artifact>;
}

/// Loaded, cross-referenced view of a [`Storage`]
#[derive(Debug)]
pub struct BuildDatabase<S: Storage> {
    storage: S,
    characters: BTreeMap<String, Character>,
    weapons: BTreeMap<String, Weapon>,
    artifacts: BTreeMap<String, Artifact>,
}

impl<S: Storage> BuildDatabase<S> {
    /// Load every record from `storage`, normalizing cross-references and
    /// writing the normalized records back.
    pub fn new(mut storage: S) -> Result<Self, DatabaseError> {
        check_format(&storage)?;

        let keys = storage.keys();
        let characters = load_characters(&mut storage, &keys);
        let mut db = Self {
            storage,
            characters,
            weapons: BTreeMap::new(),
            artifacts: BTreeMap::new(),
        };

        db.load_weapons(&keys);
        db.load_artifacts(&keys);
        db.write_back()?;

        tracing::debug!(
            characters = db.characters.len(),
            weapons = db.weapons.len(),
            artifacts = db.artifacts.len(),
            "loaded build database"
        );
        Ok(db)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn characters(&self) -> impl Iterator<Item = &Character> {
        self.characters.values()
    }

    /// Weapons with their ids
    pub fn weapons(&self) -> impl Iterator<Item = (&str, &Weapon)> {
        self.weapons.iter().map(|(id, w)| (id.as_str(), w))
    }

    /// Artifacts with their ids
    pub fn artifacts(&self) -> impl Iterator<Item = (&str, &Artifact)> {
        self.artifacts.iter().map(|(id, a)| (id.as_str(), a))
    }

    /// The weapon a character holds, with its id
    pub fn equipped_weapon(&self, key: &str) -> Option<(&str, &Weapon)> {
        let character = self.characters.get(key)?;
        let (id, weapon) = self.weapons.get_key_value(&character.equipped_weapon)?;
        Some((id.as_str(), weapon))
    }

    /// Artifacts a character wears, with their ids, in slot order
    pub fn equipped_artifacts(&self, key: &str) -> Vec<(&str, &Artifact)> {
        let Some(character) = self.characters.get(key) else {
            return Vec::new();
        };
        character
            .equipped_artifacts
            .iter()
            .filter_map(|(_, id)| self.artifacts.get_key_value(id))
            .map(|(id, artifact)| (id.as_str(), artifact))
            .collect()
    }

    fn load_weapons(&mut self, keys: &[String]) {
        for id in record_ids(keys, WEAPON_PREFIX) {
            let Some(mut weapon) = read_record::<S, Weapon>(&mut self.storage, &id) else {
                continue;
            };

            if !weapon.location.is_empty() {
                match self.characters.get_mut(&weapon.location) {
                    Some(holder) if holder.equipped_weapon.is_empty() => {
                        holder.equipped_weapon = id.clone();
                    }
                    _ => {
                        tracing::debug!(%id, location = %weapon.location, "unequipping weapon");
                        weapon.location.clear();
                    }
                }
            }
            self.weapons.insert(id, weapon);
        }
    }

    fn load_artifacts(&mut self, keys: &[String]) {
        for id in record_ids(keys, ARTIFACT_PREFIX) {
            let Some(mut artifact) = read_record::<S, Artifact>(&mut self.storage, &id) else {
                continue;
            };

            if !artifact.location.is_empty() {
                let slot = artifact.slot_key;
                match self.characters.get_mut(&artifact.location) {
                    Some(wearer) if wearer.equipped_artifacts.get(slot).is_none() => {
                        wearer.equipped_artifacts.set(slot, id.clone());
                    }
                    _ => {
                        tracing::debug!(%id, %slot, location = %artifact.location, "unequipping artifact");
                        artifact.location.clear();
                    }
                }
            }
            self.artifacts.insert(id, artifact);
        }
    }

    fn write_back(&mut self) -> Result<(), DatabaseError> {
        let Self {
            storage,
            characters,
            weapons,
            artifacts,
        } = self;

        for (key, character) in characters.iter() {
            let storage_key = format!("{}{}", CHARACTER_PREFIX, key);
            storage
                .set_json(&storage_key, character)
                .map_err(|source| DatabaseError::Json {
                    key: storage_key.clone(),
                    source,
                })?;
        }
        for (id, weapon) in weapons.iter() {
            storage
                .set_json(id, weapon)
                .map_err(|source| DatabaseError::Json {
                    key: id.clone(),
                    source,
                })?;
        }
        for (id, artifact) in artifacts.iter() {
            storage
                .set_json(id, artifact)
                .map_err(|source| DatabaseError::Json {
                    key: id.clone(),
                    source,
                })?;
        }
        Ok(())
    }
}

impl<S: Storage> EntityStore for BuildDatabase<S> {
    fn get_character(&self, key: &str) -> Option<&Character> {
        self.characters.get(key)
    }

    fn get_weapon(&self, id: &str) -> Option<&Weapon> {
        self.weapons.get(id)
    }

    fn get_artifact(&self, id: &str) -> Option<&Artifact> {
        self.artifacts.get(id)
    }
}

fn check_format<S: Storage>(storage: &S) -> Result<(), DatabaseError> {
    let found = storage
        .get(DB_VERSION_KEY)
        .and_then(|v| v.trim().parse::<u32>().ok());

    match found {
        Some(version) if version == DB_VERSION => Ok(()),
        Some(version) if version > DB_VERSION => Err(DatabaseError::NewerFormat {
            found: version,
            supported: DB_VERSION,
        }),
        _ => Err(DatabaseError::LegacyFormat {
            found,
            expected: DB_VERSION,
        }),
    }
}

fn load_characters<S: Storage>(storage: &mut S, keys: &[String]) -> BTreeMap<String, Character> {
    let mut characters = BTreeMap::new();

    for storage_key in keys.iter().filter(|k| k.starts_with(CHARACTER_PREFIX)) {
        let Some(mut character) = read_record::<S, Character>(storage, storage_key) else {
            continue;
        };

        let suffix = &storage_key[CHARACTER_PREFIX.len()..];
        if character.key.is_empty() || character.key != suffix {
            tracing::warn!(%storage_key, key = %character.key, "dropping character stored under the wrong key");
            storage.remove(storage_key);
            continue;
        }

        // Rebuilt from weapon and artifact locations
        character.equipped_weapon.clear();
        character.equipped_artifacts = Default::default();
        characters.insert(character.key.clone(), character);
    }

    characters
}

/// Parse one record, dropping it from storage if it is unreadable
fn read_record<S: Storage, T: serde::de::DeserializeOwned>(storage: &mut S, key: &str) -> Option<T> {
    match storage.get_json::<T>(key)? {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::warn!(%key, error = %e, "dropping unreadable record");
            storage.remove(key);
            None
        }
    }
}

/// Record ids under `prefix`, with numeric suffixes in numeric order
fn record_ids(keys: &[String], prefix: &str) -> Vec<String> {
    let mut ids: Vec<String> = keys.iter().filter(|k| k.starts_with(prefix)).cloned().collect();
    ids.sort_by_key(|id| id_order(&id[prefix.len()..]));
    ids
}

fn id_order(suffix: &str) -> (u64, String) {
    // Numeric ids by value, then everything else lexically
    (suffix.parse::<u64>().unwrap_or(u64::MAX), suffix.to_string())
}
