use async_trait::async_trait;

use super::errors::GatewayError;
use crate::domain::models::MetricSample;

/// Outbound interface for publishing a single metric observation.
///
/// Fire-and-forget from the orchestrator's point of view: one data point per
/// invocation, no batching, no retry at this layer.
#[async_trait]
pub trait MetricSink: Send + Sync {
    /// Publish one data point to the monitoring backend.
    async fn emit_metric(&self, sample: &MetricSample) -> Result<(), GatewayError>;
}
