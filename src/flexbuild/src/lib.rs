//! # flexbuild
//!
//! Compact, URL-safe share strings for character builds.
//!
//! This library provides functionality to:
//! - Encode a character, its weapon and its equipped artifacts as a
//!   `v=<version>&d=<payload>` share string
//! - Decode a share string into a standalone, read-only store
//! - Pack and unpack arbitrary JSON values against declarative bit schemas
//!
//! ## Example
//!
//! ```no_run
//! use flexbuild::{BuildDatabase, SandboxStorage};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dump = std::fs::read_to_string("storage.json")?;
//! let database = BuildDatabase::new(SandboxStorage::from_json(&dump)?)?;
//!
//! // Share a character
//! let share = flexbuild::try_create_flex_object("Diluc", &database)?;
//! println!("https://example.com/flex?{}", share);
//!
//! // Load it back into its own store
//! let parsed = flexbuild::try_parse_flex_object(&share)?;
//! println!("{:?}", parsed.character());
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod database;
pub mod envelope;
pub mod flex;
pub mod model;
pub mod reference;
pub mod sandbox;
pub mod schema;
pub mod storage;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used items
#[doc(inline)]
pub use codec::{decode, encode, CodecError, CodecErrorKind, FieldPath, PathSegment};
#[doc(inline)]
pub use database::{BuildDatabase, DatabaseError, EntityStore, DB_VERSION};
#[doc(inline)]
pub use envelope::{Envelope, EnvelopeError};
#[doc(inline)]
pub use flex::{
    create_flex_object, parse_flex_object, try_create_flex_object, try_parse_flex_object,
    FlexError, ParsedFlex,
};
#[doc(inline)]
pub use model::{Artifact, Character, FlexPayload, SlotKey, Weapon};
#[doc(inline)]
pub use schema::{schema_for_version, Schema, CURRENT_VERSION};
#[doc(inline)]
pub use storage::{SandboxStorage, Storage};
