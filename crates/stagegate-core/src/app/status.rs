//! MatrixStatus - マトリクス全体のスナップショット
//!
//! 行（role）× 列（stage）ごとの完了数と、ユーザーから見たアクセス可否、
//! 営業パイプラインの現在位置をまとめた、シリアライズ可能なビューです。

use serde::Serialize;

use crate::domain::{PipelineStage, ProgressLevel, Role, RowAccess, SalesStage, TaskCount};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixStatus {
    pub rows: Vec<RowStatus>,
    pub sales: SalesStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowStatus {
    pub role: Role,
    pub label: &'static str,
    #[serde(flatten)]
    pub access: RowAccess,
    pub cells: Vec<CellStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellStatus {
    pub stage: PipelineStage,
    pub accessible: bool,
    pub completed: usize,
    pub total: usize,
    pub percentage: Option<u32>,
    pub level: Option<ProgressLevel>,
}

impl CellStatus {
    pub fn new(stage: PipelineStage, accessible: bool, count: TaskCount) -> Self {
        Self {
            stage,
            accessible,
            completed: count.completed,
            total: count.total,
            percentage: count.percentage(),
            level: count.level(),
        }
    }

    pub fn count(&self) -> TaskCount {
        TaskCount::new(self.completed, self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesStatus {
    pub current_stage: Option<u8>,
    pub stages: Vec<SalesStage>,
}

impl MatrixStatus {
    pub fn row(&self, role: Role) -> Option<&RowStatus> {
        self.rows.iter().find(|row| row.role == role)
    }
}

impl RowStatus {
    pub fn cell(&self, stage: PipelineStage) -> Option<&CellStatus> {
        self.cells.iter().find(|cell| cell.stage == stage)
    }
}
