//! HTTP client for the inventory/drift control-plane API.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client as ReqwestClient, RequestBuilder, Response};
use serde::Deserialize;
use std::time::Duration;

use crate::domain::models::{
    DetectionHandle, DetectionPoll, GatewayConfig, MetricSample, StackPage,
};
use crate::domain::ports::{GatewayError, MetricSink, StackInventory};

/// HTTP adapter implementing both collaborator ports against one
/// control-plane base URL.
///
/// Uses a pooled reqwest client with a per-request timeout and optional
/// bearer-token auth. No retry logic lives here: the orchestrator's poll
/// loop is the only retry the contract allows.
pub struct HttpDriftGateway {
    /// Reusable HTTP client with connection pooling
    http_client: ReqwestClient,
    base_url: String,
    api_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TriggerResponse {
    detection_id: String,
}

impl HttpDriftGateway {
    /// Build a gateway client from configuration.
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_max_idle_per_host(10)
            .tcp_nodelay(true)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
        })
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Turn a non-success response into a `Service` error carrying the
    /// status code and the body the control plane returned.
    async fn check_status(response: Response) -> Result<Response, GatewayError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        Err(GatewayError::Service {
            status: status.as_u16(),
            message,
        })
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|err| GatewayError::Decode(err.to_string()))
    }
}

#[async_trait]
impl StackInventory for HttpDriftGateway {
    async fn list_stacks_page(
        &self,
        next_token: Option<String>,
    ) -> Result<StackPage, GatewayError> {
        let mut request = self
            .http_client
            .get(format!("{}/v1/stacks", self.base_url));
        if let Some(token) = next_token {
            request = request.query(&[("next_token", token)]);
        }
        let response = self.authorize(request).send().await?;
        let response = Self::check_status(response).await?;
        Self::decode(response).await
    }

    async fn trigger_detection(&self, stack_name: &str) -> Result<DetectionHandle, GatewayError> {
        let request = self.http_client.post(format!(
            "{}/v1/stacks/{stack_name}/drift-detections",
            self.base_url
        ));
        let response = self.authorize(request).send().await?;
        let response = Self::check_status(response).await?;
        let trigger: TriggerResponse = Self::decode(response).await?;
        Ok(DetectionHandle::new(trigger.detection_id))
    }

    async fn poll_detection(&self, handle: &DetectionHandle) -> Result<DetectionPoll, GatewayError> {
        let request = self.http_client.get(format!(
            "{}/v1/drift-detections/{}",
            self.base_url,
            handle.as_str()
        ));
        let response = self.authorize(request).send().await?;
        let response = Self::check_status(response).await?;
        Self::decode(response).await
    }
}

#[async_trait]
impl MetricSink for HttpDriftGateway {
    async fn emit_metric(&self, sample: &MetricSample) -> Result<(), GatewayError> {
        let request = self
            .http_client
            .post(format!("{}/v1/metrics", self.base_url))
            .json(sample);
        let response = self.authorize(request).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{DetectionStatus, DriftStatus, StackStatus};
    use mockito::Matcher;

    fn gateway(base_url: &str) -> HttpDriftGateway {
        HttpDriftGateway::new(&GatewayConfig {
            base_url: base_url.to_string(),
            timeout_secs: 5,
            api_token: None,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn lists_first_page_without_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/stacks")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"stacks":[{"name":"app","status":"CREATE_COMPLETE"}],"next_token":"p2"}"#,
            )
            .create_async()
            .await;

        let page = gateway(&server.url()).list_stacks_page(None).await.unwrap();

        mock.assert_async().await;
        assert_eq!(page.stacks.len(), 1);
        assert_eq!(page.stacks[0].name, "app");
        assert_eq!(page.stacks[0].status, StackStatus::CreateComplete);
        assert_eq!(page.next_token.as_deref(), Some("p2"));
    }

    #[tokio::test]
    async fn forwards_continuation_token_as_query_param() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/stacks")
            .match_query(Matcher::UrlEncoded("next_token".into(), "p2".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"stacks":[]}"#)
            .create_async()
            .await;

        let page = gateway(&server.url())
            .list_stacks_page(Some("p2".to_string()))
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(page.stacks.is_empty());
        assert!(page.next_token.is_none());
    }

    #[tokio::test]
    async fn trigger_returns_detection_handle() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/stacks/app/drift-detections")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"detection_id":"det-42"}"#)
            .create_async()
            .await;

        let handle = gateway(&server.url())
            .trigger_detection("app")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(handle.as_str(), "det-42");
    }

    #[tokio::test]
    async fn poll_decodes_completed_detection() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1/drift-detections/det-42")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"detection_status":"DETECTION_COMPLETE","drift_status":"DRIFTED"}"#,
            )
            .create_async()
            .await;

        let poll = gateway(&server.url())
            .poll_detection(&DetectionHandle::new("det-42"))
            .await
            .unwrap();

        assert_eq!(poll.detection_status, DetectionStatus::Complete);
        assert_eq!(poll.drift_status, Some(DriftStatus::Drifted));
    }

    #[tokio::test]
    async fn non_success_status_becomes_service_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1/stacks")
            .with_status(500)
            .with_body("inventory backend exploded")
            .create_async()
            .await;

        let err = gateway(&server.url())
            .list_stacks_page(None)
            .await
            .unwrap_err();

        match err {
            GatewayError::Service { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "inventory backend exploded");
            }
            other => panic!("expected Service error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_becomes_decode_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/v1/stacks")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let err = gateway(&server.url())
            .list_stacks_page(None)
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::Decode(_)));
    }

    #[tokio::test]
    async fn sends_bearer_token_when_configured() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/stacks")
            .match_header("authorization", "Bearer s3cret")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"stacks":[]}"#)
            .create_async()
            .await;

        let gateway = HttpDriftGateway::new(&GatewayConfig {
            base_url: server.url(),
            timeout_secs: 5,
            api_token: Some("s3cret".to_string()),
        })
        .unwrap();
        gateway.list_stacks_page(None).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn emit_metric_posts_the_sample() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/metrics")
            .match_body(Matcher::PartialJson(serde_json::json!({
                "namespace": "Acme/Drift",
                "name": "DriftedStacks",
                "value": 2,
                "unit": "Count",
            })))
            .with_status(202)
            .create_async()
            .await;

        let sample = MetricSample::drifted_stacks("Acme/Drift", 2);
        gateway(&server.url()).emit_metric(&sample).await.unwrap();

        mock.assert_async().await;
    }
}
