//! Task identifiers.
//!
//! # 設計
//! - タスク番号はパイプライン全体で一意な正の整数（1〜101 程度）
//! - 連番である必要はない（欠番に意味はない）
//! - JSON では数値として、`task_data` のキーとしては文字列として現れる

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one task in the pipeline.
///
/// Serialized transparently as its number, so `{"5": {...}}` map keys and
/// `"taskId": 5` fields both round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u32);

impl TaskId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for TaskId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task-{}", self.0)
    }
}
