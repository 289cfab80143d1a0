//! String key-value backing stores.
//!
//! [`Storage`] is the seam between a [`crate::BuildDatabase`] and wherever its
//! records live. [`SandboxStorage`] keeps them in process memory and is what
//! a decoded share string is reconstructed into.

use serde::{de::DeserializeOwned, Serialize};
use std::collections::BTreeMap;

/// A string key-value backing store holding JSON records
pub trait Storage {
    fn get(&self, key: &str) -> Option<&str>;

    fn set(&mut self, key: &str, value: String);

    fn remove(&mut self, key: &str) -> Option<String>;

    /// All keys, in ascending order
    fn keys(&self) -> Vec<String>;

    /// Read and parse a JSON record. `None` if the key is absent.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<Result<T, serde_json::Error>>
    where
        Self: Sized,
    {
        self.get(key).map(serde_json::from_str)
    }

    /// Serialize and store a JSON record
    fn set_json<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), serde_json::Error>
    where
        Self: Sized,
    {
        let json = serde_json::to_string(value)?;
        self.set(key, json);
        Ok(())
    }
}

/// Process-local storage that never touches disk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SandboxStorage {
    entries: BTreeMap<String, String>,
}

impl SandboxStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build storage from a JSON object of entries, such as a dump of browser
    /// local storage. String values are stored verbatim; any other value is
    /// stored as its JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: BTreeMap<String, serde_json::Value> = serde_json::from_str(json)?;
        Ok(entries
            .into_iter()
            .map(|(key, value)| match value {
                serde_json::Value::String(s) => (key, s),
                other => (key, other.to_string()),
            })
            .collect())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for SandboxStorage {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Storage for SandboxStorage {
    fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}
