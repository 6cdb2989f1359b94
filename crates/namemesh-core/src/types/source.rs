//! Sources and the name claims they hold.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{NameMeshError, Result};
use crate::types::zone::Zone;

/// One source's assertion that a name belongs to the holder of `public_key`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameClaim {
    /// Public key the name is attributed to
    #[serde(rename = "pk")]
    pub public_key: String,

    /// Trust confidence. Endorsements of foreign names stay strictly below
    /// 1.0; a claim backing the source's own zone is submitted at 1.0.
    pub weight: f64,
}

impl NameClaim {
    /// Validate the claim weight: inside (0, 1]
    pub fn validate(&self) -> Result<()> {
        if self.weight > 0.0 && self.weight <= 1.0 {
            Ok(())
        } else {
            Err(NameMeshError::validation(
                "weight",
                format!("{} is outside (0, 1]", self.weight),
            ))
        }
    }
}

/// Syntactic validity and availability of a name, as judged by the
/// directory before zone creation.
///
/// `taken` is non-exclusive: claiming an already-taken name is allowed,
/// it simply becomes another competing claim for conflict resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameAvailability {
    /// The name the answer refers to, canonical ASCII form
    pub name: String,
    /// Whether the name is syntactically acceptable
    pub valid: bool,
    /// Whether another source already claims it
    pub taken: bool,
}

/// A local identity capable of claiming names and owning zones.
///
/// Every key in `zones` must also appear in `names` (a zone implies a name
/// claim); `names` may hold additional entries with no zone, which are pure
/// endorsements of someone else's key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    /// Source identifier, assigned by the directory
    #[serde(default)]
    pub id: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Name claims, keyed by canonical ASCII label
    #[serde(default)]
    pub names: BTreeMap<String, NameClaim>,

    /// Self-authored zones, keyed by canonical ASCII label
    #[serde(default)]
    pub zones: BTreeMap<String, Zone>,
}

impl Source {
    /// The claim this source holds for `name`, if any
    #[must_use]
    pub fn claim(&self, name: &str) -> Option<&NameClaim> {
        self.names.get(name)
    }

    /// The self-authored zone for `name`, if any
    #[must_use]
    pub fn zone(&self, name: &str) -> Option<&Zone> {
        self.zones.get(name)
    }

    /// Returns true if `name` is backed by a zone this source authors
    #[must_use]
    pub fn is_zone_backed(&self, name: &str) -> bool {
        self.zones.contains_key(name)
    }

    /// Names backed by a self-authored zone, with their claims
    pub fn zone_backed(&self) -> impl Iterator<Item = (&str, &NameClaim)> {
        self.names
            .iter()
            .filter(|(name, _)| self.zones.contains_key(*name))
            .map(|(name, claim)| (name.as_str(), claim))
    }

    /// Pure endorsements: claims with no corresponding zone.
    ///
    /// These are excluded from listings about self-authored zones but
    /// still count when resolving what this source claims about a name.
    pub fn endorsements(&self) -> impl Iterator<Item = (&str, &NameClaim)> {
        self.names
            .iter()
            .filter(|(name, _)| !self.zones.contains_key(*name))
            .map(|(name, claim)| (name.as_str(), claim))
    }

    /// Zone keys with no matching name claim — an invariant violation on
    /// the directory's side, surfaced so callers can flag corrupt state
    #[must_use]
    pub fn missing_claims(&self) -> Vec<&str> {
        self.zones
            .keys()
            .filter(|name| !self.names.contains_key(*name))
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claim(pk: &str, weight: f64) -> NameClaim {
        NameClaim {
            public_key: pk.into(),
            weight,
        }
    }

    #[test]
    fn endorsements_exclude_zone_backed_names() {
        let json = r#"{
            "id": "local",
            "name": "My source",
            "description": "",
            "names": {
                "mine.nm": {"pk": "K1", "weight": 1.0},
                "theirs.nm": {"pk": "K2", "weight": 0.7}
            },
            "zones": {
                "mine.nm": {"name": "mine.nm", "pk": "K1", "version": 1, "entries": []}
            }
        }"#;
        let source: Source = serde_json::from_str(json).unwrap();

        let endorsed: Vec<_> = source.endorsements().map(|(n, _)| n).collect();
        assert_eq!(endorsed, vec!["theirs.nm"]);

        let backed: Vec<_> = source.zone_backed().map(|(n, _)| n).collect();
        assert_eq!(backed, vec!["mine.nm"]);

        assert!(source.is_zone_backed("mine.nm"));
        assert!(!source.is_zone_backed("theirs.nm"));
        assert!(source.missing_claims().is_empty());
    }

    #[test]
    fn zone_without_claim_is_flagged() {
        let mut source: Source = serde_json::from_str(r#"{"names": {}, "zones": {}}"#).unwrap();
        source.zones.insert(
            "orphan.nm".into(),
            Zone {
                name: "orphan.nm".into(),
                public_key: "K".into(),
                version: 1,
                entries: vec![],
            },
        );
        assert_eq!(source.missing_claims(), vec!["orphan.nm"]);
    }

    #[test]
    fn claim_weight_bounds() {
        assert!(claim("K", 1.0).validate().is_ok());
        assert!(claim("K", 0.5).validate().is_ok());
        assert!(claim("K", 0.0).validate().unwrap_err().is_validation());
        assert!(claim("K", 1.1).validate().unwrap_err().is_validation());
    }
}
