//! Dependency map for task prerequisites.
//!
//! Design:
//! - Forward edges: task -> ordered prerequisites (what it waits for)
//! - Reverse edges: task -> tasks that list it as a prerequisite
//! - Invariant: edges and reverse_edges must be kept in sync
//! - Keyed by task id only; the role is applied at evaluation time
//! - Cycles are not detected

use std::collections::{BTreeSet, HashMap};

use crate::domain::TaskId;

/// Prerequisite mapping for the whole pipeline.
///
/// Keeps both directions for cheap lookups:
/// - `edges`: TaskId -> prerequisites, in declaration order
/// - `reverse_edges`: TaskId -> tasks waiting for it
#[derive(Debug, Clone, Default)]
pub struct DependencyMap {
    /// Forward edges: task -> tasks it depends on (waits for)
    edges: HashMap<TaskId, Vec<TaskId>>,

    /// Reverse edges: task -> tasks that depend on it
    reverse_edges: HashMap<TaskId, BTreeSet<TaskId>>,
}

impl DependencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dependency: `task` requires `depends_on`.
    ///
    /// Example: add_dependency(2, 1) means "2 waits for 1".
    /// Repeated declarations of the same edge are kept once.
    pub fn add_dependency(&mut self, task: TaskId, depends_on: TaskId) {
        let prerequisites = self.edges.entry(task).or_default();
        if !prerequisites.contains(&depends_on) {
            prerequisites.push(depends_on);
        }
        self.reverse_edges
            .entry(depends_on)
            .or_default()
            .insert(task);
    }

    /// Declare a task's entry even when it has no prerequisites.
    ///
    /// An empty entry behaves like no entry when evaluated (nothing to wait for).
    pub fn declare(&mut self, task: TaskId, prerequisites: &[TaskId]) {
        self.edges.entry(task).or_default();
        for &prerequisite in prerequisites {
            self.add_dependency(task, prerequisite);
        }
    }

    /// Prerequisites of `task`, or `None` when the task has no entry.
    pub fn get_dependencies(&self, task: TaskId) -> Option<&[TaskId]> {
        self.edges.get(&task).map(Vec::as_slice)
    }

    /// Check if `task` has any prerequisites.
    pub fn has_dependencies(&self, task: TaskId) -> bool {
        self.edges
            .get(&task)
            .map(|deps| !deps.is_empty())
            .unwrap_or(false)
    }

    /// Tasks that list `task` as a prerequisite, ascending.
    ///
    /// Note: a waiting task may have other prerequisites too; completing
    /// `task` does not by itself unlock it.
    pub fn get_waiting_tasks(&self, task: TaskId) -> Vec<TaskId> {
        self.reverse_edges
            .get(&task)
            .map(|waiting| waiting.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
