//! Domain errors for the drift monitoring job.

use thiserror::Error;

use super::ports::GatewayError;

/// Errors that abort a drift-monitoring invocation.
///
/// Every variant is fatal to the whole run: no partial per-stack progress is
/// kept and no metric is emitted for the interval.
#[derive(Debug, Error)]
pub enum OrchestrationError {
    #[error("Metric namespace is required but was not provided")]
    MissingNamespace,

    #[error("One or more stacks not found: {}", .0.join(", "))]
    StacksNotFound(Vec<String>),

    #[error("Drift detection failed for stack {stack}: {reason}")]
    DetectionFailed { stack: String, reason: String },

    #[error("Drift detection timed out for stack {stack} after {attempts} polls")]
    DetectionTimedOut { stack: String, attempts: u32 },

    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),
}

pub type OrchestrationResult<T> = Result<T, OrchestrationError>;
