//! Role models mirroring the `v1/roles` JSON schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A role as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Role identifier.
    pub id: String,
    /// Role name.
    pub name: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Search filter prepended to every query run by members of the role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_predicate: Option<String>,
    /// Identifiers of users holding the role.
    #[serde(default)]
    pub users: Vec<String>,
    /// Fine-grained capabilities granted by the role.
    #[serde(default)]
    pub capabilities: Vec<String>,
    /// Whether the role is built in and immutable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_defined: Option<bool>,
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

/// Payload for creating or updating a role; the API accepts the same shape
/// for both.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoleDefinition {
    /// Role name.
    pub name: String,
    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Search filter prepended to every query run by members of the role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_predicate: Option<String>,
    /// Identifiers of users holding the role.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<String>,
    /// Fine-grained capabilities granted by the role.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub capabilities: Vec<String>,
}

/// One page of the role listing.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RolePage {
    /// Roles on this page.
    pub data: Vec<Role>,
    /// Continuation token for the next page, absent on the last page.
    #[serde(default)]
    pub next: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn role_deserializes_from_api_shape() {
        let role: Role = serde_json::from_value(json!({
            "id": "R1",
            "name": "auditor",
            "filterPredicate": "_sourceCategory=prod/*",
            "users": ["U1", "U2"],
            "capabilities": ["viewCollectors", "searchAuditIndex"],
            "systemDefined": false
        }))
        .unwrap();

        assert_eq!(role.filter_predicate.as_deref(), Some("_sourceCategory=prod/*"));
        assert_eq!(role.users.len(), 2);
        assert_eq!(role.capabilities[1], "searchAuditIndex");
    }

    #[test]
    fn definition_omits_empty_collections() {
        let definition = RoleDefinition {
            name: "auditor".to_string(),
            ..RoleDefinition::default()
        };
        let value = serde_json::to_value(&definition).unwrap();
        assert_eq!(value, json!({"name": "auditor"}));
    }
}
