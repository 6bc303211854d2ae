//! SalesStageTracker - 8 段階の営業パイプラインのポインタ
//!
//! # 2 つの更新操作（意図的に非対称）
//! - `set_current(n)`: stage < n が completed、stage == n が current
//! - `advance(n)`:     stage <= n が completed、stage == n + 1 が current
//!
//! `set_current` は営業タスク n を開いたとき、`advance` は完了したときに使います。
//! `advance(8)` の後は current が存在しません（パイプライン終了）。

use crate::domain::{Role, SALES_STAGE_COUNT, SalesStage, TaskId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesStageTracker {
    stages: Vec<SalesStage>,
}

impl Default for SalesStageTracker {
    fn default() -> Self {
        Self {
            stages: SalesStage::initial(),
        }
    }
}

impl SalesStageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a persisted list. Returns `None` unless it holds exactly the
    /// stages `1..=8` in order.
    pub fn from_stages(stages: Vec<SalesStage>) -> Option<Self> {
        let well_formed = stages.len() == usize::from(SALES_STAGE_COUNT)
            && stages.iter().zip(1u8..).all(|(stage, id)| stage.id == id);
        well_formed.then_some(Self { stages })
    }

    pub fn stages(&self) -> &[SalesStage] {
        &self.stages
    }

    /// Id of the current stage, `None` once the pipeline is closed.
    pub fn current_stage(&self) -> Option<u8> {
        self.stages.iter().find(|s| s.current).map(|s| s.id)
    }

    /// Point at stage `id`. Returns `false` (no change) for ids outside `1..=8`.
    pub fn set_current(&mut self, id: u8) -> bool {
        if !Self::is_stage_id(id) {
            tracing::debug!(stage = id, "ignoring set_current for unknown sales stage");
            return false;
        }
        for stage in &mut self.stages {
            stage.completed = stage.id < id;
            stage.current = stage.id == id;
        }
        true
    }

    /// Mark stage `id` and everything before it completed; `id + 1` becomes
    /// current. Returns `false` (no change) for ids outside `1..=8`.
    pub fn advance(&mut self, id: u8) -> bool {
        if !Self::is_stage_id(id) {
            tracing::debug!(stage = id, "ignoring advance for unknown sales stage");
            return false;
        }
        for stage in &mut self.stages {
            stage.completed = stage.id <= id;
            stage.current = u16::from(stage.id) == u16::from(id) + 1;
        }
        true
    }

    /// Sales stage driven by `task` in `row`, if any.
    ///
    /// Only the first eight tasks of the `alpha-sales` row move the pointer.
    pub fn stage_for_task(row: Role, task: TaskId) -> Option<u8> {
        if row != Role::AlphaSales {
            return None;
        }
        u8::try_from(task.get()).ok().filter(|&id| Self::is_stage_id(id))
    }

    fn is_stage_id(id: u8) -> bool {
        (1..=SALES_STAGE_COUNT).contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn completed_ids(tracker: &SalesStageTracker) -> Vec<u8> {
        tracker
            .stages()
            .iter()
            .filter(|s| s.completed)
            .map(|s| s.id)
            .collect()
    }

    fn at_stage_three() -> SalesStageTracker {
        let mut tracker = SalesStageTracker::new();
        tracker.set_current(3);
        tracker
    }

    #[test]
    fn starts_at_first_stage() {
        let tracker = SalesStageTracker::new();
        assert_eq!(tracker.current_stage(), Some(1));
        assert!(completed_ids(&tracker).is_empty());
    }

    #[test]
    fn set_current_completes_only_earlier_stages() {
        let mut tracker = at_stage_three();
        assert!(tracker.set_current(5));

        assert_eq!(completed_ids(&tracker), vec![1, 2, 3, 4]);
        assert_eq!(tracker.current_stage(), Some(5));
        assert!(!tracker.stages()[4].completed);
    }

    #[test]
    fn advance_completes_through_the_stage() {
        let mut tracker = at_stage_three();
        assert!(tracker.advance(5));

        assert_eq!(completed_ids(&tracker), vec![1, 2, 3, 4, 5]);
        assert_eq!(tracker.current_stage(), Some(6));
    }

    #[test]
    fn set_current_can_move_backwards() {
        let mut tracker = SalesStageTracker::new();
        tracker.advance(6);
        tracker.set_current(2);

        assert_eq!(completed_ids(&tracker), vec![1]);
        assert_eq!(tracker.current_stage(), Some(2));
    }

    #[test]
    fn advancing_the_last_stage_closes_the_pipeline() {
        let mut tracker = SalesStageTracker::new();
        tracker.advance(8);

        assert_eq!(completed_ids(&tracker).len(), 8);
        assert_eq!(tracker.current_stage(), None);
    }

    #[rstest]
    #[case(0)]
    #[case(9)]
    #[case(u8::MAX)]
    fn unknown_ids_are_ignored(#[case] id: u8) {
        let mut tracker = at_stage_three();
        let before = tracker.clone();

        assert!(!tracker.set_current(id));
        assert!(!tracker.advance(id));
        assert_eq!(tracker, before);
    }

    #[test]
    fn at_most_one_stage_is_current() {
        let mut tracker = SalesStageTracker::new();
        for id in 1..=8 {
            tracker.advance(id);
            assert!(tracker.stages().iter().filter(|s| s.current).count() <= 1);
            tracker.set_current(id);
            assert_eq!(tracker.stages().iter().filter(|s| s.current).count(), 1);
        }
    }

    #[rstest]
    #[case::sales_task(Role::AlphaSales, 4, Some(4))]
    #[case::ninth_sales_task(Role::AlphaSales, 9, None)]
    #[case::development_task(Role::AlphaSales, 11, None)]
    #[case::other_row(Role::AlphaSsc, 4, None)]
    fn stage_for_task(#[case] row: Role, #[case] task: u32, #[case] expected: Option<u8>) {
        assert_eq!(SalesStageTracker::stage_for_task(row, TaskId::new(task)), expected);
    }

    #[test]
    fn restore_rejects_malformed_lists() {
        let mut stages = SalesStage::initial();
        assert!(SalesStageTracker::from_stages(stages.clone()).is_some());

        stages.swap(0, 1);
        assert!(SalesStageTracker::from_stages(stages).is_none());

        let short: Vec<SalesStage> = SalesStage::initial().into_iter().take(7).collect();
        assert!(SalesStageTracker::from_stages(short).is_none());
    }

    #[test]
    fn persisted_shape() {
        let value = serde_json::to_value(SalesStageTracker::new().stages()).unwrap();
        assert_eq!(
            value[0],
            serde_json::json!({"id": 1, "name": "Contacto Inicial", "completed": false, "current": true})
        );
    }
}
