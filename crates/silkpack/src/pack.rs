//! The persisted voice-pack mapping: entry name to base64-encoded container.
//!
//! Entries hold the exact byte sequence the encoder produced, so a pack
//! round-trips containers bit-identically. The textual carrier is JSON;
//! consumers that need another key/value format re-wrap the same mapping.

use std::collections::BTreeMap;

use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};

use silkpack_container::is_valid_container;

/// Errors from voice-pack construction and lookup.
#[derive(Debug, thiserror::Error)]
pub enum PackError {
    /// The bytes offered for an entry do not start with a SILK header.
    #[error("entry {name:?} is not a SILK container")]
    InvalidContainer { name: String },

    /// Lookup for a name the pack does not hold.
    #[error("no entry named {name:?}")]
    UnknownEntry { name: String },

    /// An entry's stored text is not valid base64.
    #[error("entry {name:?} holds invalid base64: {source}")]
    Base64 {
        name: String,
        source: base64::DecodeError,
    },

    /// The pack file is not valid JSON.
    #[error("voice pack JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A name-keyed collection of SILK containers.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct VoicePack {
    entries: BTreeMap<String, String>,
}

impl VoicePack {
    /// Create an empty pack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a container under `name`, replacing any previous entry.
    ///
    /// The bytes must start with a SILK header; anything else would not
    /// decode when pulled back out.
    pub fn insert(&mut self, name: impl Into<String>, container: &[u8]) -> Result<(), PackError> {
        let name = name.into();
        if !is_valid_container(container) {
            return Err(PackError::InvalidContainer { name });
        }
        self.entries
            .insert(name, general_purpose::STANDARD.encode(container));
        Ok(())
    }

    /// Fetch an entry's container bytes.
    pub fn get(&self, name: &str) -> Result<Vec<u8>, PackError> {
        let encoded = self.entries.get(name).ok_or_else(|| PackError::UnknownEntry {
            name: name.to_string(),
        })?;
        general_purpose::STANDARD
            .decode(encoded)
            .map_err(|source| PackError::Base64 {
                name: name.to_string(),
                source,
            })
    }

    /// Remove an entry, returning whether it existed.
    pub fn remove(&mut self, name: &str) -> bool {
        self.entries.remove(name).is_some()
    }

    /// Entry names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the pack holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a pack from its JSON text.
    pub fn from_json(text: &str) -> Result<Self, PackError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize the pack to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, PackError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_container(tag: u8) -> Vec<u8> {
        let mut container = b"\x02#!SILK_V3".to_vec();
        container.extend_from_slice(&[0x02, 0x00, tag, tag, 0x00, 0x00]);
        container
    }

    #[test]
    fn insert_get_roundtrip_is_bit_identical() {
        let mut pack = VoicePack::new();
        let container = sample_container(0xAB);
        pack.insert("greeting", &container).unwrap();
        assert_eq!(pack.get("greeting").unwrap(), container);
    }

    #[test]
    fn rejects_non_container_bytes() {
        let mut pack = VoicePack::new();
        let err = pack.insert("bogus", b"plain bytes").unwrap_err();
        assert!(matches!(err, PackError::InvalidContainer { .. }));
        assert!(pack.is_empty());
    }

    #[test]
    fn unknown_entry_reported_by_name() {
        let pack = VoicePack::new();
        let err = pack.get("missing").unwrap_err();
        assert!(matches!(err, PackError::UnknownEntry { name } if name == "missing"));
    }

    #[test]
    fn json_roundtrip_preserves_entries() {
        let mut pack = VoicePack::new();
        pack.insert("a", &sample_container(1)).unwrap();
        pack.insert("b", &sample_container(2)).unwrap();

        let restored = VoicePack::from_json(&pack.to_json().unwrap()).unwrap();
        assert_eq!(restored.len(), 2);
        assert_eq!(restored.get("a").unwrap(), sample_container(1));
        assert_eq!(restored.get("b").unwrap(), sample_container(2));
    }

    #[test]
    fn names_are_sorted() {
        let mut pack = VoicePack::new();
        pack.insert("zeta", &sample_container(1)).unwrap();
        pack.insert("alpha", &sample_container(2)).unwrap();
        let names: Vec<_> = pack.names().collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn corrupted_base64_surfaces_as_error() {
        let json = r#"{"entries":{"bad":"%%%not-base64%%%"}}"#;
        let pack = VoicePack::from_json(json).unwrap();
        let err = pack.get("bad").unwrap_err();
        assert!(matches!(err, PackError::Base64 { .. }));
    }

    #[test]
    fn remove_reports_presence() {
        let mut pack = VoicePack::new();
        pack.insert("gone", &sample_container(3)).unwrap();
        assert!(pack.remove("gone"));
        assert!(!pack.remove("gone"));
    }
}
