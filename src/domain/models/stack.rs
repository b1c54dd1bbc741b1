//! Stack inventory models.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a stack as reported by the inventory service.
///
/// Unrecognized wire values decode to `Other` so a new status introduced
/// by the control plane never breaks inventory listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StackStatus {
    CreateInProgress,
    CreateComplete,
    CreateFailed,
    RollbackInProgress,
    RollbackFailed,
    RollbackComplete,
    DeleteInProgress,
    DeleteFailed,
    DeleteComplete,
    UpdateInProgress,
    UpdateCompleteCleanupInProgress,
    UpdateComplete,
    UpdateRollbackInProgress,
    UpdateRollbackFailed,
    UpdateRollbackCompleteCleanupInProgress,
    UpdateRollbackComplete,
    ReviewInProgress,
    ImportInProgress,
    ImportComplete,
    ImportRollbackInProgress,
    ImportRollbackFailed,
    ImportRollbackComplete,
    #[serde(other)]
    Other,
}

impl StackStatus {
    /// Whether the stack is settled enough for drift detection to be
    /// meaningful. Anything mid-transition, failed, or deleted is not.
    pub const fn is_stable(self) -> bool {
        matches!(
            self,
            Self::CreateComplete | Self::UpdateComplete | Self::ImportComplete
        )
    }
}

/// One row of the stack inventory listing. Immutable once retrieved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct StackSummary {
    /// Stack name, unique within one inventory listing.
    pub name: String,
    /// Lifecycle status at listing time.
    pub status: StackStatus,
}

impl StackSummary {
    pub fn new(name: impl Into<String>, status: StackStatus) -> Self {
        Self {
            name: name.into(),
            status,
        }
    }
}

/// One page of a paginated inventory listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct StackPage {
    /// Stacks on this page, in the inventory's stable order.
    pub stacks: Vec<StackSummary>,
    /// Continuation token; `None` means this was the last page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}
