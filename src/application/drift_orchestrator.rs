//! Drift detection orchestration.
//!
//! One invocation resolves the full stack inventory, checks that every
//! explicitly requested stack exists, filters to stacks in a stable lifecycle
//! state, runs drift detection against each one sequentially, and publishes
//! the drifted-stack count as a single metric sample.
//!
//! Processing is strictly sequential per stack. At expected fleet sizes
//! (tens of stacks) the simpler failure model is worth the latency; worst
//! case wall time is `targets x max_poll_attempts x poll_interval`, which
//! bounds the fleet size one invocation can service.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::domain::errors::{OrchestrationError, OrchestrationResult};
use crate::domain::models::{
    DetectionConfig, DetectionStatus, DriftStatus, MetricSample, StackSummary,
};
use crate::domain::ports::{MetricSink, StackInventory};

/// Inputs for one orchestrator invocation.
#[derive(Debug, Clone, Default)]
pub struct RunRequest {
    /// Stacks to check. `None` or empty means every stack in the inventory.
    pub stack_names: Option<Vec<String>>,
    /// Namespace to publish the metric under. Required.
    pub namespace: Option<String>,
}

/// Runs one drift-monitoring invocation against injected collaborators.
///
/// Stateless across runs; construct once per invocation or reuse, either way
/// no state carries over.
pub struct DriftOrchestrator {
    inventory: Arc<dyn StackInventory>,
    metrics: Arc<dyn MetricSink>,
    detection: DetectionConfig,
}

impl DriftOrchestrator {
    /// Create an orchestrator with the contract polling defaults
    /// (1 s interval, 60 attempts).
    pub fn new(inventory: Arc<dyn StackInventory>, metrics: Arc<dyn MetricSink>) -> Self {
        Self::with_detection_config(inventory, metrics, DetectionConfig::default())
    }

    /// Create an orchestrator with explicit polling settings.
    pub fn with_detection_config(
        inventory: Arc<dyn StackInventory>,
        metrics: Arc<dyn MetricSink>,
        detection: DetectionConfig,
    ) -> Self {
        Self {
            inventory,
            metrics,
            detection,
        }
    }

    /// Execute one invocation end to end.
    ///
    /// Returns the number of drifted stacks, which is also the value of the
    /// single metric sample emitted. Any failure aborts the remaining
    /// per-stack work and suppresses the emission entirely.
    pub async fn run(&self, request: &RunRequest) -> OrchestrationResult<u64> {
        let namespace = request
            .namespace
            .as_deref()
            .filter(|ns| !ns.trim().is_empty())
            .ok_or(OrchestrationError::MissingNamespace)?;

        // Unset and empty both mean "all stacks", never "no stacks".
        let requested = request
            .stack_names
            .as_deref()
            .filter(|names| !names.is_empty());

        let inventory = self.resolve_inventory().await?;
        info!(total_stacks = inventory.len(), "Resolved stack inventory");

        if let Some(names) = requested {
            let known: HashSet<&str> = inventory.iter().map(|s| s.name.as_str()).collect();
            let mut missing: Vec<String> = Vec::new();
            for name in names {
                if !known.contains(name.as_str()) && !missing.contains(name) {
                    missing.push(name.clone());
                }
            }
            if !missing.is_empty() {
                warn!(missing = ?missing, "Requested stacks absent from inventory");
                return Err(OrchestrationError::StacksNotFound(missing));
            }
        }

        let requested_set: Option<HashSet<&str>> =
            requested.map(|names| names.iter().map(String::as_str).collect());

        // Inventory order is preserved so runs are deterministic.
        let targets: Vec<&StackSummary> = inventory
            .iter()
            .filter(|stack| stack.status.is_stable())
            .filter(|stack| {
                requested_set
                    .as_ref()
                    .is_none_or(|set| set.contains(stack.name.as_str()))
            })
            .collect();
        info!(
            eligible = targets.len(),
            "Selected eligible stacks for drift detection"
        );

        let mut drifted: u64 = 0;
        for stack in targets {
            let status = self.detect_drift(&stack.name).await?;
            if status == DriftStatus::Drifted {
                drifted += 1;
            }
        }
        info!(drifted, "Drift detection finished for all targets");

        let sample = MetricSample::drifted_stacks(namespace, drifted);
        self.metrics.emit_metric(&sample).await?;
        debug!(namespace = %sample.namespace, value = sample.value, "Published metric sample");

        Ok(drifted)
    }

    /// Fetch every inventory page and concatenate them in order.
    ///
    /// The existence check needs the complete inventory, so pages are not
    /// processed as they arrive.
    async fn resolve_inventory(&self) -> OrchestrationResult<Vec<StackSummary>> {
        let mut stacks = Vec::new();
        let mut next_token: Option<String> = None;
        loop {
            let page = self.inventory.list_stacks_page(next_token).await?;
            stacks.extend(page.stacks);
            match page.next_token {
                Some(token) => next_token = Some(token),
                None => break,
            }
        }
        Ok(stacks)
    }

    /// Trigger detection for one stack and poll it to a terminal state.
    async fn detect_drift(&self, stack_name: &str) -> OrchestrationResult<DriftStatus> {
        let handle = self.inventory.trigger_detection(stack_name).await?;
        debug!(stack = %stack_name, handle = %handle, "Triggered drift detection");

        let interval = Duration::from_millis(self.detection.poll_interval_ms);
        for attempt in 1..=self.detection.max_poll_attempts {
            tokio::time::sleep(interval).await;
            let poll = self.inventory.poll_detection(&handle).await?;
            match poll.detection_status {
                DetectionStatus::Failed => {
                    let reason = poll
                        .failure_reason
                        .unwrap_or_else(|| "no reason reported".to_string());
                    return Err(OrchestrationError::DetectionFailed {
                        stack: stack_name.to_string(),
                        reason,
                    });
                }
                DetectionStatus::Complete => {
                    let status = poll.drift_status.unwrap_or(DriftStatus::Unknown);
                    debug!(stack = %stack_name, ?status, attempt, "Drift detection complete");
                    return Ok(status);
                }
                DetectionStatus::InProgress => {}
            }
        }

        Err(OrchestrationError::DetectionTimedOut {
            stack: stack_name.to_string(),
            attempts: self.detection.max_poll_attempts,
        })
    }
}
