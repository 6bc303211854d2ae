//! Completion record: durable evidence that a task is done for one role.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::TaskId;
use super::role::Role;

/// `(task, role, completed_at)`.
///
/// At most one record exists per `(task_id, role_id)`; the store enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionRecord {
    pub task_id: TaskId,
    pub role_id: Role,
    #[serde(with = "super::timestamp")]
    pub completed_at: DateTime<Utc>,
}
