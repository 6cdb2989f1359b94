//! Zone mutation endpoints.
//!
//! Zones are mutated wholesale: the caller recomputes the complete entry
//! list (see `namemesh_core::diff`) and submits it as one replace call at
//! the source's current claim weight. The directory bumps the zone
//! version on success and rejects submissions against a stale version.

use crate::DirectoryClient;
use namemesh_core::{diff, NameMeshError, ResourceRecord, Result, Source};
use serde::Serialize;

/// Zone mutation endpoints
pub struct ZoneApi<'a> {
    client: &'a DirectoryClient,
}

#[derive(Serialize)]
struct ReplaceZoneRequest<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    entries: Option<&'a [ResourceRecord]>,
    weight: f64,
}

impl<'a> ZoneApi<'a> {
    pub(crate) fn new(client: &'a DirectoryClient) -> Self {
        Self { client }
    }

    /// Create a new empty zone under a fresh key pair, claimed at weight 1.0
    pub async fn create(&self, source_id: &str, zone_name: &str) -> Result<()> {
        if !zone_name.is_ascii() {
            return Err(NameMeshError::validation(
                "name",
                format!("'{zone_name}' is not in canonical ASCII form"),
            ));
        }
        self.client
            .post_outcome(
                &format!("/api/privdns/source/{source_id}/zone"),
                &ReplaceZoneRequest {
                    name: zone_name,
                    entries: None,
                    weight: 1.0,
                },
            )
            .await
    }

    /// Full-replace submit of a zone's entry list.
    ///
    /// Every entry is validated locally first; a validation failure means
    /// nothing was sent.
    pub async fn replace(
        &self,
        source_id: &str,
        zone_name: &str,
        entries: &[ResourceRecord],
        weight: f64,
    ) -> Result<()> {
        for entry in entries {
            entry.validate()?;
        }
        self.client
            .post_outcome(
                &format!("/api/privdns/source/{source_id}/zone"),
                &ReplaceZoneRequest {
                    name: zone_name,
                    entries: Some(entries),
                    weight,
                },
            )
            .await
    }

    /// Delete a whole zone. The zone's secret key is lost with it.
    pub async fn delete(&self, source_id: &str, zone_name: &str) -> Result<()> {
        self.client
            .delete_outcome(&format!("/api/privdns/source/{source_id}/zone/{zone_name}"))
            .await
    }

    /// Edit (or add) one entry: recompute the full list with the diff
    /// engine and submit it at the source's current claim weight.
    ///
    /// Returns the submitted list so the caller can update its view.
    pub async fn apply_entry_edit(
        &self,
        source: &Source,
        zone_name: &str,
        target_slot: Option<&ResourceRecord>,
        replacement: ResourceRecord,
    ) -> Result<Vec<ResourceRecord>> {
        let (zone, claim) = self.zone_and_claim(source, zone_name)?;
        let entries = diff::apply_edit(&zone.entries, target_slot, replacement);
        self.replace(&source.id, zone_name, &entries, claim.weight)
            .await?;
        Ok(entries)
    }

    /// Delete every entry structurally equal to `target` and submit the
    /// remaining list.
    pub async fn remove_entries(
        &self,
        source: &Source,
        zone_name: &str,
        target: &ResourceRecord,
    ) -> Result<Vec<ResourceRecord>> {
        let (zone, claim) = self.zone_and_claim(source, zone_name)?;
        let entries = diff::remove_entry(&zone.entries, target);
        self.replace(&source.id, zone_name, &entries, claim.weight)
            .await?;
        Ok(entries)
    }

    fn zone_and_claim<'s>(
        &self,
        source: &'s Source,
        zone_name: &str,
    ) -> Result<(&'s namemesh_core::Zone, &'s namemesh_core::NameClaim)> {
        let zone = source.zone(zone_name).ok_or_else(|| NameMeshError::NotFound {
            resource: format!("zone '{zone_name}' in source '{}'", source.id),
        })?;
        let claim = source.claim(zone_name).ok_or_else(|| NameMeshError::NotFound {
            resource: format!("name claim '{zone_name}' in source '{}'", source.id),
        })?;
        Ok((zone, claim))
    }
}
