//! Token models mirroring the `v1/tokens` JSON schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A token as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// Token identifier.
    pub id: String,
    /// Token name.
    pub name: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Token status (`Active` or `Inactive`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Token type (e.g. `CollectorRegistration`).
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    /// Server-side version counter, echoed back on update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    /// The encoded token paired with the deployment URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoded_token_and_url: Option<String>,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Identifier of the creating user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    /// Last modification timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
    /// Identifier of the last modifying user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<String>,
}

/// Payload for creating a token.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTokenRequest {
    /// Token name.
    pub name: String,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Token status (`Active` or `Inactive`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Token type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
}

/// Payload for updating a token. The API requires the current `version`
/// alongside the HTTP-level `If-Match` check.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTokenRequest {
    /// New name.
    pub name: String,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Token type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    /// Version counter from the last read of the token.
    pub version: i64,
}

/// Response of the token list endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TokenList {
    /// All tokens in the account.
    pub data: Vec<Token>,
}
