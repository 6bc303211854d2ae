//! Completion Store - (task, role) ごとの完了記録
//!
//! # 不変条件
//! - (task, role) ごとに記録は高々 1 件
//! - 完了にすると既存の記録を置き換え（タイムスタンプ更新）、未完了にすると削除
//! - 記録がない限り完了扱いにはしない（未知のタスクも false）

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::domain::{CompletionRecord, PipelineStage, Role, TaskCount, TaskId};
use crate::registry::TaskRegistry;

#[derive(Debug, Clone, Default)]
pub struct CompletionStore {
    records: HashMap<(TaskId, Role), DateTime<Utc>>,
}

impl CompletionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from persisted records. A later duplicate of a pair wins.
    pub fn from_records(records: impl IntoIterator<Item = CompletionRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|r| ((r.task_id, r.role_id), r.completed_at))
            .collect();
        Self { records }
    }

    pub fn is_completed(&self, task: TaskId, role: Role) -> bool {
        self.records.contains_key(&(task, role))
    }

    pub fn completed_at(&self, task: TaskId, role: Role) -> Option<DateTime<Utc>> {
        self.records.get(&(task, role)).copied()
    }

    /// Upsert (`completed == true`, stamped with `now`) or remove the record.
    pub fn set_completed(&mut self, task: TaskId, role: Role, completed: bool, now: DateTime<Utc>) {
        if completed {
            self.records.insert((task, role), now);
        } else {
            self.records.remove(&(task, role));
        }
    }

    /// Completed tasks of `role` within the registry's `(role, stage)` range.
    ///
    /// `total` is 0 for undeclared or empty ranges; callers handle it.
    pub fn count_completed(&self, registry: &TaskRegistry, role: Role, stage: PipelineStage) -> TaskCount {
        let Some(range) = registry.range(role, stage) else {
            return TaskCount::default();
        };
        let completed = range
            .ids()
            .filter(|&task| self.is_completed(task, role))
            .count();
        TaskCount::new(completed, range.len())
    }

    /// Snapshot ordered by task id, then role.
    pub fn records(&self) -> Vec<CompletionRecord> {
        let mut records: Vec<CompletionRecord> = self
            .records
            .iter()
            .map(|(&(task_id, role_id), &completed_at)| CompletionRecord {
                task_id,
                role_id,
                completed_at,
            })
            .collect();
        records.sort_by_key(|r| (r.task_id, r.role_id));
        records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn nothing_is_completed_by_default() {
        let store = CompletionStore::new();
        assert!(!store.is_completed(TaskId::new(1), Role::AlphaSales));
        assert!(!store.is_completed(TaskId::new(9999), Role::AlphaSales));
    }

    #[test]
    fn set_completed_roundtrip() {
        let mut store = CompletionStore::new();
        let task = TaskId::new(4);

        store.set_completed(task, Role::AlphaSales, true, t0());
        assert!(store.is_completed(task, Role::AlphaSales));

        store.set_completed(task, Role::AlphaSales, false, t0());
        assert!(!store.is_completed(task, Role::AlphaSales));
        assert!(store.is_empty());
    }

    #[test]
    fn completing_again_replaces_the_record() {
        let mut store = CompletionStore::new();
        let task = TaskId::new(4);
        let later = t0() + Duration::hours(1);

        store.set_completed(task, Role::AlphaSales, true, t0());
        store.set_completed(task, Role::AlphaSales, true, later);

        assert_eq!(store.len(), 1);
        assert_eq!(store.completed_at(task, Role::AlphaSales), Some(later));
    }

    #[test]
    fn records_are_scoped_by_role() {
        let mut store = CompletionStore::new();
        let eho = TaskId::new(101);
        store.set_completed(eho, Role::AlphaSsc, true, t0());

        assert!(store.is_completed(eho, Role::AlphaSsc));
        assert!(!store.is_completed(eho, Role::AlphaSales));
    }

    #[test]
    fn count_matches_records_in_range() {
        let registry = TaskRegistry::standard();
        let mut store = CompletionStore::new();
        for n in [1, 2, 5] {
            store.set_completed(TaskId::new(n), Role::AlphaSales, true, t0());
        }
        // Outside the acquisition range, or another role.
        store.set_completed(TaskId::new(11), Role::AlphaSales, true, t0());
        store.set_completed(TaskId::new(3), Role::AlphaSsc, true, t0());

        let count = store.count_completed(&registry, Role::AlphaSales, PipelineStage::Acquisition);
        assert_eq!(count, TaskCount::new(3, 9));
        assert!(count.completed <= count.total);
    }

    #[test]
    fn count_for_undeclared_cell_is_zero() {
        let registry = TaskRegistry::standard();
        let store = CompletionStore::new();
        let count = store.count_completed(&registry, Role::EsporaStrategy, PipelineStage::Calibration);
        assert_eq!(count, TaskCount::new(0, 0));
    }

    #[test]
    fn snapshot_roundtrip() {
        let mut store = CompletionStore::new();
        store.set_completed(TaskId::new(20), Role::EsporaStrategy, true, t0());
        store.set_completed(TaskId::new(1), Role::AlphaSales, true, t0());

        let records = store.records();
        assert_eq!(records[0].task_id, TaskId::new(1));

        let restored = CompletionStore::from_records(records);
        assert!(restored.is_completed(TaskId::new(20), Role::EsporaStrategy));
        assert_eq!(restored.len(), 2);
    }
}
