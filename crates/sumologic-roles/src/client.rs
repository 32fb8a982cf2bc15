//! Typed client for the Roles API.

use crate::models::{Role, RoleDefinition, RolePage};
use crate::Result;
use sumologic_core::{Client, Error, QueryParams};
use tracing::debug;

const BASE_PATH: &str = "v1/roles";

/// Client for `v1/roles`.
#[derive(Clone)]
pub struct RolesClient {
    client: Client,
}

impl RolesClient {
    /// Wrap a core [`Client`].
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// List roles, one page at a time; pass the previous page's `next` token
    /// to continue.
    pub async fn list(&self, token: Option<&str>) -> Result<RolePage> {
        let mut params = QueryParams::new();
        params.push_opt("token", token);
        self.client
            .get_json(BASE_PATH, &params.into_pairs())
            .await?
            .ok_or_else(|| Error::NotFound(BASE_PATH.to_string()))
    }

    /// Fetch a role by ID; `Ok(None)` when it does not exist.
    pub async fn get(&self, id: &str) -> Result<Option<Role>> {
        self.client.get_json(&format!("{BASE_PATH}/{id}"), &[]).await
    }

    /// Create a role.
    pub async fn create(&self, definition: &RoleDefinition) -> Result<Role> {
        self.client.post_json(BASE_PATH, definition).await
    }

    /// Update a role through the conditional-write path.
    pub async fn update(&self, id: &str, definition: &RoleDefinition) -> Result<Role> {
        self.client
            .put_json(&format!("{BASE_PATH}/{id}"), definition)
            .await
    }

    /// Delete a role. A role that is already gone is treated as success.
    pub async fn delete(&self, id: &str) -> Result<()> {
        if self
            .client
            .delete(&format!("{BASE_PATH}/{id}"))
            .await?
            .is_none()
        {
            debug!(id, "role already absent");
        }
        Ok(())
    }
}
