//! Share string creation from a store dump

use anyhow::{bail, Context, Result};
use flexbuild::reference::is_character_key;
use flexbuild::{BuildDatabase, SandboxStorage};
use std::fs;
use std::path::Path;

pub fn handle(store: &Path, character: &str) -> Result<()> {
    println!("{}", share_from_file(store, character)?);
    Ok(())
}

/// Load a store dump and create a share string for one of its characters
pub fn share_from_file(store: &Path, character: &str) -> Result<String> {
    if !is_character_key(character) {
        bail!("Unknown character key {:?}", character);
    }

    let dump = fs::read_to_string(store)
        .with_context(|| format!("Failed to read store {}", store.display()))?;
    let storage = SandboxStorage::from_json(&dump)
        .with_context(|| format!("{} is not a JSON object of entries", store.display()))?;
    let database = BuildDatabase::new(storage).context("Failed to load store")?;

    tracing::debug!(
        characters = database.characters().count(),
        weapons = database.weapons().count(),
        artifacts = database.artifacts().count(),
        "loaded store"
    );

    flexbuild::try_create_flex_object(character, &database)
        .with_context(|| format!("Cannot share {}", character))
}
