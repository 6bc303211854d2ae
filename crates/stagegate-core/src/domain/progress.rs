//! Completed/total counters per (role, stage) cell.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaskCount {
    pub completed: usize,
    pub total: usize,
}

/// Colour bucket of a progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressLevel {
    Low,
    Medium,
    High,
}

impl TaskCount {
    pub const fn new(completed: usize, total: usize) -> Self {
        Self { completed, total }
    }

    /// Rounded percentage, or `None` for an empty cell (`total == 0`).
    pub fn percentage(&self) -> Option<u32> {
        if self.total == 0 {
            return None;
        }
        let ratio = self.completed as f64 / self.total as f64;
        Some((ratio * 100.0).round() as u32)
    }

    pub fn level(&self) -> Option<ProgressLevel> {
        self.percentage().map(|pct| match pct {
            0..=33 => ProgressLevel::Low,
            34..=66 => ProgressLevel::Medium,
            _ => ProgressLevel::High,
        })
    }

    pub fn is_done(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}
