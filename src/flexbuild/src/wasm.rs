//! WebAssembly bindings for flexbuild
//!
//! Entities cross the boundary as JSON strings, in the same shape the
//! browser store keeps them.

use crate::database::{BuildDatabase, EntityStore};
use crate::flex::{self, ParsedFlex};
use crate::storage::SandboxStorage;
use wasm_bindgen::prelude::*;

/// Create a share string for a character
///
/// # Arguments
/// * `character_key` - Key of the character to share
/// * `storage_json` - JSON object of store entries, e.g. a localStorage dump
///
/// # Returns
/// The share string, or `undefined` if the character cannot be shared
#[wasm_bindgen(js_name = createFlexObject)]
pub fn create_flex_object(character_key: &str, storage_json: &str) -> Result<Option<String>, JsValue> {
    let storage = SandboxStorage::from_json(storage_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid storage: {}", e)))?;
    let database = BuildDatabase::new(storage)
        .map_err(|e| JsValue::from_str(&format!("Load failed: {}", e)))?;
    Ok(flex::create_flex_object(character_key, &database))
}

/// Parse a share string
///
/// # Returns
/// A [`FlexView`] over the reconstructed store, or `undefined` if the
/// string cannot be loaded
#[wasm_bindgen(js_name = parseFlexObject)]
pub fn parse_flex_object(text: &str) -> Option<FlexView> {
    flex::parse_flex_object(text).map(|inner| FlexView { inner })
}

/// JavaScript-friendly view of a parsed share
#[wasm_bindgen]
pub struct FlexView {
    inner: ParsedFlex,
}

#[wasm_bindgen]
impl FlexView {
    #[wasm_bindgen(getter, js_name = characterKey)]
    pub fn character_key(&self) -> String {
        self.inner.character_key.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn version(&self) -> u32 {
        self.inner.version
    }

    #[wasm_bindgen(getter, js_name = isCurrent)]
    pub fn is_current(&self) -> bool {
        self.inner.is_current()
    }

    /// Character record as JSON
    #[wasm_bindgen(js_name = getCharacter)]
    pub fn get_character(&self, key: &str) -> Result<Option<String>, JsValue> {
        self.inner.database.get_character(key).map(to_json).transpose()
    }

    /// Weapon record as JSON
    #[wasm_bindgen(js_name = getWeapon)]
    pub fn get_weapon(&self, id: &str) -> Result<Option<String>, JsValue> {
        self.inner.database.get_weapon(id).map(to_json).transpose()
    }

    /// Artifact record as JSON
    #[wasm_bindgen(js_name = getArtifact)]
    pub fn get_artifact(&self, id: &str) -> Result<Option<String>, JsValue> {
        self.inner.database.get_artifact(id).map(to_json).transpose()
    }

    /// Ids of the shared character's artifacts, in slot order
    #[wasm_bindgen(js_name = equippedArtifactIds)]
    pub fn equipped_artifact_ids(&self) -> js_sys::Array {
        let arr = js_sys::Array::new();
        for (id, _) in self.inner.database.equipped_artifacts(&self.inner.character_key) {
            arr.push(&JsValue::from_str(id));
        }
        arr
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("Serialize failed: {}", e)))
}
