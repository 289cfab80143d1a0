//! Share string creation and parsing.
//!
//! [`create_flex_object`] snapshots one character, its weapon and its
//! equipped artifacts from a store into a `v=<version>&d=<payload>` string.
//! [`parse_flex_object`] turns such a string back into a throwaway
//! [`BuildDatabase`] holding exactly those entities.
//!
//! The `try_` variants report why an operation failed; the plain variants
//! collapse every failure to `None`, logging codec failures in debug builds.

use serde_json::{Map, Value};

use crate::codec::{self, CodecError};
use crate::database::{BuildDatabase, EntityStore};
use crate::envelope::{self, EnvelopeError};
use crate::model::{Character, FlexPayload};
use crate::sandbox;
use crate::schema::{schema_for_version, CURRENT_VERSION};
use crate::storage::SandboxStorage;

#[derive(Debug, thiserror::Error)]
pub enum FlexError {
    #[error("payload does not match schema: {0}")]
    SchemaMismatch(#[from] CodecError),

    #[error("malformed share string: {0}")]
    MalformedEnvelope(String),

    #[error("unsupported protocol version {version}")]
    UnsupportedVersion { version: u32 },

    #[error("invalid flex object: {0}")]
    InvalidFlexObject(String),

    #[error("nothing to share: {0}")]
    NothingToShare(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<EnvelopeError> for FlexError {
    fn from(err: EnvelopeError) -> Self {
        match err {
            EnvelopeError::Malformed(msg) => FlexError::MalformedEnvelope(msg),
            EnvelopeError::UnsupportedVersion { version } => {
                FlexError::UnsupportedVersion { version }
            }
        }
    }
}

/// A share string loaded into its own store
#[derive(Debug)]
pub struct ParsedFlex {
    pub database: BuildDatabase<SandboxStorage>,
    pub character_key: String,
    /// Protocol version the share was written with
    pub version: u32,
}

impl ParsedFlex {
    /// Whether the share was written with the current protocol version
    pub fn is_current(&self) -> bool {
        self.version == CURRENT_VERSION
    }

    /// The shared character
    pub fn character(&self) -> Option<&Character> {
        self.database.get_character(&self.character_key)
    }
}

/// Encode a character and its equipment as a share string
pub fn try_create_flex_object<S: EntityStore + ?Sized>(
    character_key: &str,
    store: &S,
) -> Result<String, FlexError> {
    let character = store
        .get_character(character_key)
        .ok_or_else(|| FlexError::NothingToShare(format!("no character {:?}", character_key)))?;

    let mut flex_character = serde_json::to_value(character)?;
    if let (Some(weapon), Value::Object(fields)) = (
        store.get_weapon(&character.equipped_weapon),
        &mut flex_character,
    ) {
        fields.insert("weapon".to_string(), serde_json::to_value(weapon)?);
    }

    // Slot order; empty slots and dangling ids are skipped
    let artifacts = character
        .equipped_artifacts
        .iter()
        .filter_map(|(_, id)| store.get_artifact(id))
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()?;

    let mut payload = Map::new();
    payload.insert("character".to_string(), flex_character);
    payload.insert("artifacts".to_string(), Value::Array(artifacts));

    let schema = schema_for_version(CURRENT_VERSION).ok_or(FlexError::UnsupportedVersion {
        version: CURRENT_VERSION,
    })?;
    let data = codec::encode(&Value::Object(payload), schema)?;

    Ok(envelope::wrap(CURRENT_VERSION, &data))
}

/// Encode a character and its equipment as a share string, or `None` if it
/// cannot be shared
pub fn create_flex_object<S: EntityStore + ?Sized>(character_key: &str, store: &S) -> Option<String> {
    try_create_flex_object(character_key, store)
        .map_err(|e| log_failure("encode", &e))
        .ok()
}

/// Load a share string into a fresh sandbox store
pub fn try_parse_flex_object(text: &str) -> Result<ParsedFlex, FlexError> {
    let envelope = envelope::unwrap(text)?;
    let version = envelope.version;
    let schema = schema_for_version(version).ok_or(FlexError::UnsupportedVersion { version })?;

    let value = codec::decode(envelope.payload, schema)?;
    let payload: FlexPayload = serde_json::from_value(value)?;
    let (database, character_key) = sandbox::materialize(payload)?;

    Ok(ParsedFlex {
        database,
        character_key,
        version,
    })
}

/// Load a share string into a fresh sandbox store, or `None` if it cannot be
/// loaded
pub fn parse_flex_object(text: &str) -> Option<ParsedFlex> {
    try_parse_flex_object(text)
        .map_err(|e| log_failure("decode", &e))
        .ok()
}

fn log_failure(action: &str, err: &FlexError) {
    if !cfg!(debug_assertions) {
        return;
    }
    match err {
        FlexError::SchemaMismatch(e) => {
            tracing::error!(path = %e.path(), "failed to {} flex object: {}", action, e.kind());
        }
        FlexError::InvalidFlexObject(_) | FlexError::Json(_) => {
            tracing::error!("failed to {} flex object: {}", action, err);
        }
        _ => tracing::debug!("failed to {} flex object: {}", action, err),
    }
}
