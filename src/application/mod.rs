//! Application layer: use case orchestration.

pub mod drift_orchestrator;

pub use drift_orchestrator::{DriftOrchestrator, RunRequest};
