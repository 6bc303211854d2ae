//! Task Detail Store: one record per task id, shared across roles.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{TaskDetailPatch, TaskDetailRecord, TaskId};

/// Serialized as the `task_data` map (`{"<id>": record}`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskDetailStore {
    tasks: BTreeMap<TaskId, TaskDetailRecord>,
}

impl TaskDetailStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, task: TaskId) -> Option<&TaskDetailRecord> {
        self.tasks.get(&task)
    }

    /// The record `save` would produce, without storing it.
    pub fn preview(&self, task: TaskId, patch: TaskDetailPatch, now: DateTime<Utc>) -> TaskDetailRecord {
        self.tasks
            .get(&task)
            .cloned()
            .unwrap_or_else(|| TaskDetailRecord::empty(task, now))
            .merged(patch, now)
    }

    /// Merge `patch` into the task's record (created on first save).
    pub fn save(&mut self, task: TaskId, patch: TaskDetailPatch, now: DateTime<Utc>) -> &TaskDetailRecord {
        let record = self.preview(task, patch, now);
        self.insert(record)
    }

    /// Store a complete record, replacing any previous one for its id.
    pub fn insert(&mut self, record: TaskDetailRecord) -> &TaskDetailRecord {
        let id = record.id;
        self.tasks.insert(id, record);
        &self.tasks[&id]
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaskDetailRecord> {
        self.tasks.values()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
