//! UnlockEvaluator - 依存関係によるロック判定
//!
//! # ルール
//! 1. privileged（super-admin）なら常に unlock
//! 2. 依存エントリがなければ unlock
//! 3. それ以外は、すべての prerequisite が「同じ role で」完了していれば unlock
//!
//! 状態はキャッシュせず、呼び出しごとに再計算します。

use crate::domain::{Role, TaskId};
use crate::registry::TaskRegistry;

use super::CompletionStore;

/// Borrowed view over the registry and the completion store.
#[derive(Debug, Clone, Copy)]
pub struct UnlockEvaluator<'a> {
    registry: &'a TaskRegistry,
    completions: &'a CompletionStore,
}

impl<'a> UnlockEvaluator<'a> {
    pub fn new(registry: &'a TaskRegistry, completions: &'a CompletionStore) -> Self {
        Self {
            registry,
            completions,
        }
    }

    pub fn is_unlocked(&self, task: TaskId, role: Role, privileged: bool) -> bool {
        if privileged {
            return true;
        }
        match self.registry.prerequisites(task) {
            None => true,
            Some(prerequisites) => prerequisites
                .iter()
                .all(|&prerequisite| self.completions.is_completed(prerequisite, role)),
        }
    }

    /// Prerequisites of `task` not yet completed for `role`, in declaration order.
    pub fn blocking_prerequisites(&self, task: TaskId, role: Role) -> Vec<TaskId> {
        self.registry
            .prerequisites(task)
            .unwrap_or_default()
            .iter()
            .copied()
            .filter(|&prerequisite| !self.completions.is_completed(prerequisite, role))
            .collect()
    }
}
