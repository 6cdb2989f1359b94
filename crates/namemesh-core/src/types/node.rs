//! Read-side node inspection types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identity and operator details of the directory node we are talking to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeInfo {
    /// Top-level domains this node serves
    #[serde(default)]
    pub tld: Vec<String>,

    /// Operator contact information, free-form key/value
    #[serde(default)]
    pub operator: BTreeMap<String, String>,

    /// Software version reported by the node
    #[serde(default)]
    pub version: String,
}

/// One neighbor as reported by the node's status endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Neighbor {
    /// Display name
    #[serde(default)]
    pub name: String,

    /// Neighbor address
    pub ip: String,

    /// Neighbor's directory API port
    #[serde(default)]
    pub api_port: u16,

    /// Trust weight attributed to this neighbor
    #[serde(default)]
    pub weight: f64,

    /// Which roster the neighbor came from (peer list, trust list, ...)
    #[serde(default)]
    pub source: String,

    /// Liveness as reported by the node, e.g. "up" or "down"
    #[serde(default)]
    pub status: String,
}

impl Neighbor {
    /// Returns true if the node reports this neighbor reachable
    #[must_use]
    pub fn is_up(&self) -> bool {
        self.status.eq_ignore_ascii_case("up")
    }
}

/// One row of the global browse listing: the currently winning claim for
/// a name, as aggregated by the node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameListEntry {
    /// Public key the name currently resolves to
    #[serde(rename = "pk")]
    pub public_key: String,

    /// Aggregate trust weight of the winning claim
    pub weight: f64,

    /// Version of the backing zone
    #[serde(default)]
    pub version: u64,
}
