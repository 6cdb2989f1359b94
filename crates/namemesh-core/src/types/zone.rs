//! Versioned zones.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::record::ResourceRecord;

/// A versioned, keyed resource-record set published under a public key.
///
/// The directory bumps `version` on every accepted mutation and rejects
/// submissions made against a stale version; the client never mutates the
/// counter itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zone {
    /// Zone apex, canonical ASCII form
    #[serde(default)]
    pub name: String,

    /// Public key the zone is published under
    #[serde(default, rename = "pk")]
    pub public_key: String,

    /// Monotonically increasing version counter, owned by the directory
    #[serde(default)]
    pub version: u64,

    /// Resource records, in publication order
    #[serde(default)]
    pub entries: Vec<ResourceRecord>,
}

impl Zone {
    /// Validate every entry before submission
    pub fn validate_entries(&self) -> Result<()> {
        for entry in &self.entries {
            entry.validate()?;
        }
        Ok(())
    }

    /// Returns true if the zone has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::record::RecordType;

    #[test]
    fn zone_decodes_from_wire_shape() {
        let json = r#"{
            "name": "example.nm",
            "pk": "VFp7TXbZ4",
            "version": 3,
            "entries": [["www", "A", "1.2.3.4"], ["mail", "MX", 10, "mx.example.nm"]]
        }"#;
        let zone: Zone = serde_json::from_str(json).unwrap();
        assert_eq!(zone.version, 3);
        assert_eq!(zone.entries.len(), 2);
        assert_eq!(zone.entries[0].rtype, RecordType::A);
        assert!(zone.validate_entries().is_ok());
    }
}
