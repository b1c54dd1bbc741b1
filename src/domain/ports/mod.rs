//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines async trait interfaces that infrastructure adapters
//! must implement:
//! - `StackInventory`: inventory listing and drift-detection operations
//! - `MetricSink`: publishing the drifted-stacks data point
//!
//! These traits define the contracts that allow the orchestrator to be
//! independent of the concrete control-plane client.

pub mod errors;
pub mod metric_sink;
pub mod stack_inventory;

pub use errors::GatewayError;
pub use metric_sink::MetricSink;
pub use stack_inventory::StackInventory;
