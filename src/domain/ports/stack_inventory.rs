use async_trait::async_trait;

use super::errors::GatewayError;
use crate::domain::models::{DetectionHandle, DetectionPoll, StackPage};

/// Inventory and drift-detection interface to the control plane.
///
/// This trait defines the contract for the inventory/drift collaborator
/// following the ports-and-adapters pattern, so the orchestrator can be
/// exercised against in-memory fakes.
///
/// Listing and polling are read-only; triggering starts an asynchronous
/// detection on the collaborator's side and is the one non-idempotent call.
#[async_trait]
pub trait StackInventory: Send + Sync {
    /// Fetch one page of the stack inventory.
    ///
    /// # Arguments
    /// * `next_token` - Continuation token from the previous page, or `None`
    ///   for the first page
    ///
    /// # Returns
    /// * `Ok(StackPage)` with the page's stacks and an optional continuation
    ///   token
    /// * `Err(GatewayError)` on transport or service failure
    async fn list_stacks_page(
        &self,
        next_token: Option<String>,
    ) -> Result<StackPage, GatewayError>;

    /// Start an asynchronous drift detection for one stack.
    ///
    /// # Returns
    /// * `Ok(DetectionHandle)` correlating the operation with later polls
    /// * `Err(GatewayError)` on transport or service failure
    async fn trigger_detection(&self, stack_name: &str) -> Result<DetectionHandle, GatewayError>;

    /// Query the status of a previously triggered detection.
    async fn poll_detection(&self, handle: &DetectionHandle) -> Result<DetectionPoll, GatewayError>;
}
