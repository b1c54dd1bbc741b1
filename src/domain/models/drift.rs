//! Drift detection models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque token correlating a triggered drift detection with later polls.
///
/// Owned by the orchestrator for the lifetime of one polling loop and
/// discarded once the detection resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetectionHandle(pub String);

impl DetectionHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DetectionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Progress of an asynchronous drift detection operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetectionStatus {
    #[serde(rename = "DETECTION_IN_PROGRESS")]
    InProgress,
    #[serde(rename = "DETECTION_COMPLETE")]
    Complete,
    #[serde(rename = "DETECTION_FAILED")]
    Failed,
}

/// Final drift verdict for one stack.
///
/// Unrecognized wire values decode to `Unknown`; only an exact `Drifted`
/// contributes to the emitted count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DriftStatus {
    InSync,
    Drifted,
    #[serde(other)]
    Unknown,
}

/// One poll response for an in-flight drift detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DetectionPoll {
    /// Where the detection operation stands.
    pub detection_status: DetectionStatus,
    /// Drift verdict, populated once the detection completes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drift_status: Option<DriftStatus>,
    /// Collaborator-supplied reason, populated when the detection failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

/// Name of the metric published once per successful invocation.
pub const DRIFTED_STACKS_METRIC: &str = "DriftedStacks";

/// Unit attached to every emitted sample.
pub const METRIC_UNIT_COUNT: &str = "Count";

/// A single numeric observation destined for the metric sink.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MetricSample {
    /// Logical grouping name in the monitoring backend.
    pub namespace: String,
    /// Metric name, always [`DRIFTED_STACKS_METRIC`] for this job.
    pub name: String,
    /// Number of drifted stacks observed this invocation.
    pub value: u64,
    /// Unit of the observation, always [`METRIC_UNIT_COUNT`].
    pub unit: String,
    /// Observation time.
    pub timestamp: DateTime<Utc>,
}

impl MetricSample {
    /// Build the drifted-stacks sample for one invocation, stamped now.
    pub fn drifted_stacks(namespace: impl Into<String>, value: u64) -> Self {
        Self {
            namespace: namespace.into(),
            name: DRIFTED_STACKS_METRIC.to_string(),
            value,
            unit: METRIC_UNIT_COUNT.to_string(),
            timestamp: Utc::now(),
        }
    }
}
