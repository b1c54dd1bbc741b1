//! Domain models for drift monitoring.

pub mod config;
pub mod drift;
pub mod stack;

pub use config::{Config, DetectionConfig, GatewayConfig, LoggingConfig};
pub use drift::{
    DetectionHandle, DetectionPoll, DetectionStatus, DriftStatus, MetricSample,
    DRIFTED_STACKS_METRIC, METRIC_UNIT_COUNT,
};
pub use stack::{StackPage, StackStatus, StackSummary};
