//! Driftwatch - Stack Drift Monitor
//!
//! Driftwatch is a stateless, periodically-invoked job that checks a fleet
//! of infrastructure stacks for configuration drift and publishes the count
//! of drifted stacks as a single monitoring metric per invocation.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Models, port traits, and error taxonomy
//! - **Application Layer** (`application`): The drift orchestration use case
//! - **Service Layer** (`services`): Pure helpers (alarm period selection)
//! - **Infrastructure Layer** (`infrastructure`): Config, logging, and the
//!   HTTP control-plane adapter
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use driftwatch::application::{DriftOrchestrator, RunRequest};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Wire a gateway, then run one invocation
//!     Ok(())
//! }
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use application::{DriftOrchestrator, RunRequest};
pub use domain::errors::{OrchestrationError, OrchestrationResult};
pub use domain::models::{
    Config, DetectionConfig, DetectionHandle, DetectionPoll, DetectionStatus, DriftStatus,
    MetricSample, StackPage, StackStatus, StackSummary,
};
pub use domain::ports::{GatewayError, MetricSink, StackInventory};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{closest_supported_period, validate_run_interval};
