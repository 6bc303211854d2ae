//! TaskRegistry - 静的なパイプライン設定
//!
//! Registry は以下を純粋なデータとして公開します：
//! - stage の順序とラベル
//! - role ごとにアクセスできる stage
//! - (role, stage) ごとのタスク番号の範囲（閉区間）
//! - 依存関係（task -> prerequisites）
//! - タスクカタログ（title / description）
//!
//! # 設計原則
//! - 構築後は不変（`Arc<TaskRegistry>` で共有）
//! - 設定ミス（空の範囲、未定義のペア）はエラーにせず件数 0 として扱う
//! - 依存グラフの循環は検出しない

pub mod catalog;
pub mod dependency;
mod standard;

pub use self::catalog::{PENDING_DEFINITION, TaskCatalog, TaskInfo};
pub use self::dependency::DependencyMap;

use std::collections::HashMap;

use crate::domain::{PipelineStage, Role, TaskId};

/// Inclusive range of task ids. An inverted range holds no tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskRange {
    pub start: TaskId,
    pub end: TaskId,
}

impl TaskRange {
    pub const fn new(start: u32, end: u32) -> Self {
        Self {
            start: TaskId::new(start),
            end: TaskId::new(end),
        }
    }

    pub fn len(&self) -> usize {
        if self.end < self.start {
            0
        } else {
            (self.end.get() - self.start.get()) as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, task: TaskId) -> bool {
        self.start <= task && task <= self.end
    }

    pub fn ids(&self) -> impl Iterator<Item = TaskId> {
        (self.start.get()..=self.end.get()).map(TaskId::new)
    }
}

#[derive(Debug, Clone, Default)]
struct RowLayout {
    /// Stages shown as accessible for the row, in column order.
    stages: Vec<PipelineStage>,
    ranges: HashMap<PipelineStage, TaskRange>,
}

/// Immutable pipeline configuration.
#[derive(Debug, Clone)]
pub struct TaskRegistry {
    rows: HashMap<Role, RowLayout>,
    dependencies: DependencyMap,
    catalog: TaskCatalog,
}

impl TaskRegistry {
    /// The dashboard's production layout.
    pub fn standard() -> Self {
        standard::build()
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn stages(&self) -> &'static [PipelineStage] {
        &PipelineStage::ALL
    }

    pub fn stage_label(&self, stage: PipelineStage) -> &'static str {
        stage.label()
    }

    pub fn rows(&self) -> &'static [Role] {
        &Role::ROWS
    }

    /// Stages the row has access to; empty for unknown rows and `super-admin`.
    pub fn stage_access(&self, role: Role) -> &[PipelineStage] {
        self.rows
            .get(&role)
            .map(|row| row.stages.as_slice())
            .unwrap_or_default()
    }

    pub fn has_access(&self, role: Role, stage: PipelineStage) -> bool {
        self.stage_access(role).contains(&stage)
    }

    pub fn range(&self, role: Role, stage: PipelineStage) -> Option<TaskRange> {
        self.rows.get(&role)?.ranges.get(&stage).copied()
    }

    /// Number of tasks declared for `(role, stage)`; 0 when undeclared.
    pub fn task_total(&self, role: Role, stage: PipelineStage) -> usize {
        self.range(role, stage).map(|r| r.len()).unwrap_or(0)
    }

    /// Stage of `task` within `role`'s row.
    pub fn stage_of(&self, role: Role, task: TaskId) -> Option<PipelineStage> {
        let row = self.rows.get(&role)?;
        PipelineStage::ALL
            .into_iter()
            .find(|stage| row.ranges.get(stage).is_some_and(|r| r.contains(task)))
    }

    pub fn dependencies(&self) -> &DependencyMap {
        &self.dependencies
    }

    pub fn prerequisites(&self, task: TaskId) -> Option<&[TaskId]> {
        self.dependencies.get_dependencies(task)
    }

    /// Tasks that list `task` as a prerequisite.
    pub fn dependents(&self, task: TaskId) -> Vec<TaskId> {
        self.dependencies.get_waiting_tasks(task)
    }

    pub fn info(&self, task: TaskId) -> TaskInfo {
        self.catalog.info(task)
    }
}

impl Default for TaskRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Declarative construction of a [`TaskRegistry`].
///
/// # 使用例
/// ```ignore
/// let registry = TaskRegistry::builder()
///     .range(Role::AlphaSales, PipelineStage::Acquisition, 1, 9)
///     .chain(1, 9)
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    rows: HashMap<Role, RowLayout>,
    dependencies: DependencyMap,
    catalog: Option<TaskCatalog>,
}

impl RegistryBuilder {
    /// Declare `start..=end` for `(role, stage)` and grant access to the stage.
    pub fn range(mut self, role: Role, stage: PipelineStage, start: u32, end: u32) -> Self {
        let row = self.rows.entry(role).or_default();
        row.ranges.insert(stage, TaskRange::new(start, end));
        if !row.stages.contains(&stage) {
            row.stages.push(stage);
            row.stages.sort();
        }
        self
    }

    /// Grant access to a stage without declaring tasks for it.
    pub fn access(mut self, role: Role, stage: PipelineStage) -> Self {
        let row = self.rows.entry(role).or_default();
        if !row.stages.contains(&stage) {
            row.stages.push(stage);
            row.stages.sort();
        }
        self
    }

    pub fn depends_on(mut self, task: u32, prerequisites: &[u32]) -> Self {
        let prerequisites: Vec<TaskId> = prerequisites.iter().copied().map(TaskId::new).collect();
        self.dependencies.declare(TaskId::new(task), &prerequisites);
        self
    }

    /// Linear chain: every id in `first + 1..=last` requires its predecessor.
    pub fn chain(mut self, first: u32, last: u32) -> Self {
        for task in first.saturating_add(1)..=last {
            self.dependencies
                .add_dependency(TaskId::new(task), TaskId::new(task - 1));
        }
        self
    }

    pub fn catalog(mut self, catalog: TaskCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn build(self) -> TaskRegistry {
        TaskRegistry {
            rows: self.rows,
            dependencies: self.dependencies,
            catalog: self.catalog.unwrap_or_default(),
        }
    }
}
