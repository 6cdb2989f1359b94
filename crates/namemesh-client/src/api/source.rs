//! Source state and name-claim endpoints.

use crate::DirectoryClient;
use namemesh_core::{NameAvailability, NameClaim, NameMeshError, Result, Source};
use serde::Serialize;

/// Source state and name-claim endpoints
pub struct SourceApi<'a> {
    client: &'a DirectoryClient,
}

#[derive(Serialize)]
struct AddNameRequest<'a> {
    name: &'a str,
    pk: &'a str,
    weight: f64,
}

impl<'a> SourceApi<'a> {
    pub(crate) fn new(client: &'a DirectoryClient) -> Self {
        Self { client }
    }

    /// Read full source state: claims and self-authored zones
    pub async fn get(&self, source_id: &str) -> Result<Source> {
        let mut source: Source = self
            .client
            .get(&format!("/api/privdns/source/{source_id}"))
            .await?;
        if source.id.is_empty() {
            source.id = source_id.to_string();
        }
        Ok(source)
    }

    /// Add or fully replace a name claim.
    ///
    /// `name` must already be in canonical ASCII form; the weight is
    /// validated locally before any remote call.
    pub async fn add_name(
        &self,
        source_id: &str,
        name: &str,
        public_key: &str,
        weight: f64,
    ) -> Result<()> {
        if !name.is_ascii() {
            return Err(NameMeshError::validation(
                "name",
                format!("'{name}' is not in canonical ASCII form"),
            ));
        }
        let claim = NameClaim {
            public_key: public_key.to_string(),
            weight,
        };
        claim.validate()?;

        self.client
            .post_outcome(
                &format!("/api/privdns/source/{source_id}/name"),
                &AddNameRequest {
                    name,
                    pk: public_key,
                    weight,
                },
            )
            .await
    }

    /// Delete a name claim
    pub async fn delete_name(&self, source_id: &str, name: &str) -> Result<()> {
        self.client
            .delete_outcome(&format!("/api/privdns/source/{source_id}/name/{name}"))
            .await
    }

    /// Ask the directory whether a name is syntactically valid and
    /// whether someone already claims it.
    ///
    /// A taken name can still be claimed; it becomes a competing claim.
    pub async fn check_name(&self, name: &str) -> Result<NameAvailability> {
        self.client
            .get_with_query("/api/privdns/check", &[("name", name)])
            .await
    }
}
