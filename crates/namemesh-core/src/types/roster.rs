//! Peer and trust rosters.
//!
//! Peer-list and trust-list entries are structurally identical, so one
//! entry type serves both. The roster is the local working copy only; the
//! directory remains the system of record and serializes writes. Entries
//! carry no version token, so two operators editing the same `ip`
//! concurrently will silently overwrite each other (last write wins).

use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use crate::error::{NameMeshError, Result};

/// Default directory API port for new entries
pub const DEFAULT_API_PORT: u16 = 14123;

/// Suggested trust weight for a newly added peer
pub const DEFAULT_TRUST_WEIGHT: f64 = 0.9;

/// One peer-list or trust-list entry, keyed by `ip`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    /// Display name
    #[serde(default)]
    pub name: String,

    /// Peer address; the roster key
    pub ip: String,

    /// Port the peer's directory API listens on
    pub api_port: u16,

    /// Trust weight, strictly inside (0, 1)
    pub weight: f64,
}

impl RosterEntry {
    /// Validate all fields locally, before any remote call
    pub fn validate(&self) -> Result<()> {
        if self.ip.parse::<IpAddr>().is_err() {
            return Err(NameMeshError::validation(
                "ip",
                format!("'{}' is not an IP address", self.ip),
            ));
        }
        if self.api_port == 0 {
            return Err(NameMeshError::validation("api_port", "port must be nonzero"));
        }
        if !(self.weight > 0.0 && self.weight < 1.0) {
            return Err(NameMeshError::validation(
                "weight",
                format!("{} is outside (0, 1)", self.weight),
            ));
        }
        Ok(())
    }
}

/// What `Roster::upsert` did with the entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// No entry with this ip existed; appended
    Added,
    /// An entry with this ip existed; fields fully replaced
    Replaced,
}

/// An ordered, `ip`-keyed collection of [`RosterEntry`] values.
///
/// Insertion order is preserved; no implicit sort is applied. Display-side
/// ordering by weight is the separate [`Roster::order_by_weight`] view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    /// Empty roster
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Roster from entries as returned by the directory
    #[must_use]
    pub fn from_entries(entries: Vec<RosterEntry>) -> Self {
        Self { entries }
    }

    /// Add or fully replace the entry keyed by `entry.ip`.
    ///
    /// Validation runs first; on failure the roster is left unchanged.
    /// There is no partial field merge: an existing entry is replaced
    /// wholesale.
    pub fn upsert(&mut self, entry: RosterEntry) -> Result<UpsertOutcome> {
        entry.validate()?;
        match self.entries.iter_mut().find(|e| e.ip == entry.ip) {
            Some(existing) => {
                *existing = entry;
                Ok(UpsertOutcome::Replaced)
            }
            None => {
                self.entries.push(entry);
                Ok(UpsertOutcome::Added)
            }
        }
    }

    /// Remove the entry keyed by `ip`.
    ///
    /// Removing an absent key is a no-op success; returns whether an
    /// entry was actually removed.
    pub fn remove(&mut self, ip: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.ip != ip);
        self.entries.len() != before
    }

    /// Entry keyed by `ip`, if present
    #[must_use]
    pub fn get(&self, ip: &str) -> Option<&RosterEntry> {
        self.entries.iter().find(|e| e.ip == ip)
    }

    /// All entries, in insertion order
    #[must_use]
    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the roster holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read-only view sorted by descending trust weight.
    ///
    /// Roster state itself stays in insertion order.
    #[must_use]
    pub fn order_by_weight(&self) -> Vec<&RosterEntry> {
        let mut view: Vec<&RosterEntry> = self.entries.iter().collect();
        view.sort_unstable_by(|a, b| b.weight.total_cmp(&a.weight));
        view
    }
}

/// A roster as served by the directory: entries plus list metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterInfo {
    /// Display name of the list
    #[serde(default)]
    pub name: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// The entries, in the directory's stored order
    #[serde(default)]
    pub entries: Vec<RosterEntry>,
}

impl RosterInfo {
    /// Take the entries as a working [`Roster`]
    #[must_use]
    pub fn into_roster(self) -> Roster {
        Roster::from_entries(self.entries)
    }
}
