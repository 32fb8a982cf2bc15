//! Typed client for the Partitions API.

use crate::models::{
    CreatePartitionRequest, ListPartitionsParams, Partition, PartitionPage,
    UpdatePartitionRequest,
};
use crate::Result;
use sumologic_core::{Client, Error};
use tracing::debug;

const BASE_PATH: &str = "v1/partitions";

/// Client for `v1/partitions`.
#[derive(Clone)]
pub struct PartitionsClient {
    client: Client,
}

impl PartitionsClient {
    /// Wrap a core [`Client`].
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// List partitions, one page at a time.
    pub async fn list(&self, params: &ListPartitionsParams) -> Result<PartitionPage> {
        self.client
            .get_json(BASE_PATH, &params.to_pairs())
            .await?
            .ok_or_else(|| Error::NotFound(BASE_PATH.to_string()))
    }

    /// Fetch a partition by ID; `Ok(None)` when it does not exist.
    pub async fn get(&self, id: &str) -> Result<Option<Partition>> {
        self.client.get_json(&format!("{BASE_PATH}/{id}"), &[]).await
    }

    /// Create a partition.
    pub async fn create(&self, request: &CreatePartitionRequest) -> Result<Partition> {
        self.client.post_json(BASE_PATH, request).await
    }

    /// Update a partition. Runs the read-then-write conditional update in the
    /// core client, so a concurrent modification surfaces as a conflict.
    pub async fn update(&self, id: &str, request: &UpdatePartitionRequest) -> Result<Partition> {
        self.client
            .put_json(&format!("{BASE_PATH}/{id}"), request)
            .await
    }

    /// Decommission a partition. A partition that is already gone is treated
    /// as success, so the operation is idempotent.
    pub async fn decommission(&self, id: &str) -> Result<()> {
        let path = format!("{BASE_PATH}/{id}/decommission");
        match self.client.post(&path, &serde_json::json!({})).await? {
            Some(_) => Ok(()),
            None => {
                debug!(id, "partition already absent");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sumologic_core::{ClientBuilder, ConnectionConfig, Credentials};
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> PartitionsClient {
        let client = ClientBuilder::for_url(server.uri(), Credentials::new("id", "key"))
            .with_connection(ConnectionConfig::new().with_rate_budget(10_000))
            .build()
            .unwrap();
        PartitionsClient::new(client)
    }

    #[tokio::test]
    async fn list_passes_pagination_params() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/partitions"))
            .and(query_param("limit", "100"))
            .and(query_param("token", "opaque"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"id": "P1", "name": "apache"}],
                "next": null
            })))
            .mount(&server)
            .await;

        let page = test_client(&server)
            .list(&ListPartitionsParams {
                limit: Some(100),
                token: Some("opaque".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].name, "apache");
        assert!(page.next.is_none());
    }

    #[tokio::test]
    async fn list_token_with_reserved_characters_survives_encoding() {
        let server = MockServer::start().await;
        // Continuation tokens are base64-flavored and routinely carry `+` and
        // `=`. The matcher compares the decoded value, so it only matches
        // when the token reaches the server intact.
        Mock::given(method("GET"))
            .and(path("/v1/partitions"))
            .and(query_param("token", "ab+cd=="))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": []
            })))
            .mount(&server)
            .await;

        let page = test_client(&server)
            .list(&ListPartitionsParams {
                limit: None,
                token: Some("ab+cd==".to_string()),
            })
            .await
            .unwrap();

        assert!(page.data.is_empty());
    }

    #[tokio::test]
    async fn get_absent_partition_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/partitions/P404"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let partition = test_client(&server).get("P404").await.unwrap();
        assert!(partition.is_none());
    }

    #[tokio::test]
    async fn create_sends_camel_case_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/partitions"))
            .and(body_json(json!({
                "name": "apache",
                "routingExpression": "_sourceCategory=*/apache",
                "retentionPeriod": 365
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "P1",
                "name": "apache",
                "routingExpression": "_sourceCategory=*/apache",
                "retentionPeriod": 365
            })))
            .mount(&server)
            .await;

        let partition = test_client(&server)
            .create(&CreatePartitionRequest {
                name: "apache".to_string(),
                routing_expression: Some("_sourceCategory=*/apache".to_string()),
                retention_period: Some(365),
                ..CreatePartitionRequest::default()
            })
            .await
            .unwrap();

        assert_eq!(partition.id, "P1");
    }

    #[tokio::test]
    async fn update_runs_conditional_write() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/partitions/P1"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("ETag", "\"v5\"")
                    .set_body_json(json!({"id": "P1", "name": "apache"})),
            )
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/v1/partitions/P1"))
            .and(header("If-Match", "v5"))
            .and(body_json(json!({"retentionPeriod": 30})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "P1",
                "name": "apache",
                "retentionPeriod": 30
            })))
            .mount(&server)
            .await;

        let updated = test_client(&server)
            .update(
                "P1",
                &UpdatePartitionRequest {
                    retention_period: Some(30),
                    ..UpdatePartitionRequest::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.retention_period, Some(30));
    }

    #[tokio::test]
    async fn decommission_is_idempotent() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/partitions/P1/decommission"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        test_client(&server).decommission("P1").await.unwrap();
    }
}
