//! Peer-list and trust-list endpoints.
//!
//! Roster writes carry no version token: the directory applies them
//! last-write-wins, so two operators editing the same `ip` concurrently
//! silently overwrite each other. Callers wanting stronger guarantees
//! must serialize their own writes.

use crate::client::urlencoding;
use crate::DirectoryClient;
use namemesh_core::{Result, RosterEntry, RosterInfo};

/// Peer-list / trust-list endpoints; `list_id` addresses one roster
pub struct RosterApi<'a> {
    client: &'a DirectoryClient,
}

impl<'a> RosterApi<'a> {
    pub(crate) fn new(client: &'a DirectoryClient) -> Self {
        Self { client }
    }

    /// Read a roster with its list metadata
    pub async fn get(&self, list_id: &str) -> Result<RosterInfo> {
        self.client.get(&format!("/api/privdns/list/{list_id}")).await
    }

    /// Add or fully replace the entry keyed by `entry.ip`.
    ///
    /// The entry is validated locally first; on failure nothing reaches
    /// the directory.
    pub async fn upsert(&self, list_id: &str, entry: &RosterEntry) -> Result<()> {
        entry.validate()?;
        self.client
            .post_outcome(&format!("/api/privdns/list/{list_id}"), entry)
            .await
    }

    /// Delete the entry keyed by `ip`.
    ///
    /// Deleting an absent key is reported as success by the directory.
    pub async fn remove(&self, list_id: &str, ip: &str) -> Result<()> {
        // IPv6 addresses contain ':', so the path segment must be escaped.
        self.client
            .delete_outcome(&format!(
                "/api/privdns/list/{list_id}/{}",
                urlencoding::encode(ip)
            ))
            .await
    }
}
