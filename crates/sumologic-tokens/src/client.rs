//! Typed client for the Tokens API.

use crate::models::{CreateTokenRequest, Token, TokenList, UpdateTokenRequest};
use crate::Result;
use sumologic_core::{Client, Error};
use tracing::debug;

const BASE_PATH: &str = "v1/tokens";

/// Client for `v1/tokens`.
#[derive(Clone)]
pub struct TokensClient {
    client: Client,
}

impl TokensClient {
    /// Wrap a core [`Client`].
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// List every token in the account.
    pub async fn list(&self) -> Result<Vec<Token>> {
        let list: TokenList = self
            .client
            .get_json(BASE_PATH, &[])
            .await?
            .ok_or_else(|| Error::NotFound(BASE_PATH.to_string()))?;
        Ok(list.data)
    }

    /// Fetch a token by ID; `Ok(None)` when it does not exist.
    pub async fn get(&self, id: &str) -> Result<Option<Token>> {
        self.client.get_json(&format!("{BASE_PATH}/{id}"), &[]).await
    }

    /// Create a token.
    pub async fn create(&self, request: &CreateTokenRequest) -> Result<Token> {
        self.client.post_json(BASE_PATH, request).await
    }

    /// Update a token through the conditional-write path.
    pub async fn update(&self, id: &str, request: &UpdateTokenRequest) -> Result<Token> {
        self.client
            .put_json(&format!("{BASE_PATH}/{id}"), request)
            .await
    }

    /// Delete a token. A token that is already gone is treated as success.
    pub async fn delete(&self, id: &str) -> Result<()> {
        if self
            .client
            .delete(&format!("{BASE_PATH}/{id}"))
            .await?
            .is_none()
        {
            debug!(id, "token already absent");
        }
        Ok(())
    }
}
