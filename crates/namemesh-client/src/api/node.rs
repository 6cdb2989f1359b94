//! Read-only node inspection endpoints.

use crate::DirectoryClient;
use namemesh_core::{NameListEntry, Neighbor, NodeInfo, Result, Zone};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Read-only node inspection endpoints
pub struct NodeApi<'a> {
    client: &'a DirectoryClient,
}

#[derive(Deserialize)]
struct NeighborsResponse {
    #[serde(default)]
    neighbors: Vec<Neighbor>,
}

impl<'a> NodeApi<'a> {
    pub(crate) fn new(client: &'a DirectoryClient) -> Self {
        Self { client }
    }

    /// Node identity, served TLDs, and operator contact information
    pub async fn info(&self) -> Result<NodeInfo> {
        self.client.get("/api").await
    }

    /// Current neighbor roster with liveness status
    pub async fn neighbors(&self) -> Result<Vec<Neighbor>> {
        let response: NeighborsResponse = self.client.get("/api/neighbors").await?;
        Ok(response.neighbors)
    }

    /// The global browse listing: for each name, the winning claim as
    /// aggregated by this node.
    ///
    /// Returned in map order; use `namemesh_core::resolve::order_names`
    /// for the weight-ranked display ordering.
    pub async fn names(&self) -> Result<BTreeMap<String, NameListEntry>> {
        self.client.get("/api/names").await
    }

    /// Fetch one zone by name and public key
    pub async fn zone(&self, name: &str, public_key: &str) -> Result<Zone> {
        self.client
            .get_with_query("/api/zone", &[("name", name), ("pk", public_key)])
            .await
    }
}
