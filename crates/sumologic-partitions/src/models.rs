//! Partition models mirroring the `v1/partitions` JSON schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sumologic_core::QueryParams;

/// A partition as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Partition {
    /// Partition identifier.
    pub id: String,
    /// Partition name.
    pub name: String,
    /// Routing expression selecting the data the partition indexes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing_expression: Option<String>,
    /// Analytics tier the data lands in (continuous, frequent, infrequent).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analytics_tier: Option<String>,
    /// Retention period in days; -1 means account default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention_period: Option<i64>,
    /// Whether the partition is compliant (retention locked).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_compliant: Option<bool>,
    /// Whether the partition is still receiving data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    /// Total data volume in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_bytes: Option<i64>,
    /// Data forwarding destination, if configured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_forwarding_id: Option<String>,
    /// Index type (DefaultIndex, AuditIndex, Partition).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_type: Option<String>,
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

/// Payload for creating a partition.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreatePartitionRequest {
    /// Partition name (immutable after creation).
    pub name: String,
    /// Routing expression selecting the data the partition indexes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_expression: Option<String>,
    /// Analytics tier the data lands in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics_tier: Option<String>,
    /// Retention period in days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_period: Option<i64>,
    /// Whether the partition is compliant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_compliant: Option<bool>,
}

/// Payload for updating a partition. The name cannot change.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePartitionRequest {
    /// New routing expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_expression: Option<String>,
    /// New retention period in days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_period: Option<i64>,
    /// Apply a shorter retention period to existing data immediately rather
    /// than only to new data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduce_retention_period_immediately: Option<bool>,
    /// New compliance flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_compliant: Option<bool>,
}

/// One page of the partition listing.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PartitionPage {
    /// Partitions on this page.
    pub data: Vec<Partition>,
    /// Continuation token for the next page, absent on the last page.
    #[serde(default)]
    pub next: Option<String>,
}

/// Parameters for the partition list endpoint.
#[derive(Debug, Default, Clone)]
pub struct ListPartitionsParams {
    /// Maximum number of partitions per page (1-1000).
    pub limit: Option<u32>,
    /// Continuation token from a previous page.
    pub token: Option<String>,
}

impl ListPartitionsParams {
    /// Collect the set parameters as query pairs; the client percent-encodes
    /// them, so an opaque continuation token passes through unchanged.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push_opt("limit", self.limit);
        params.push_opt("token", self.token.as_deref());
        params.into_pairs()
    }
}
