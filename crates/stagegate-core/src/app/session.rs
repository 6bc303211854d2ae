//! TaskEditSession - タスク詳細ビューの下書き
//!
//! 開いた時点の notes / completed を覚えておき、編集内容との差分で
//! 未保存の変更を判定します。アップロードはコミットまで FileProvider に
//! 渡さず、ここに積んでおくだけです。

use crate::domain::{Role, TaskId};
use crate::ports::UploadedFile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEditSession {
    task: TaskId,
    row: Role,
    initial_notes: String,
    initial_completed: bool,
    notes: String,
    completed: bool,
    staged: Vec<UploadedFile>,
}

impl TaskEditSession {
    pub(crate) fn new(task: TaskId, row: Role, notes: String, completed: bool) -> Self {
        Self {
            task,
            row,
            initial_notes: notes.clone(),
            initial_completed: completed,
            notes,
            completed,
            staged: Vec::new(),
        }
    }

    pub fn task(&self) -> TaskId {
        self.task
    }

    /// Row the session was opened from; completions are recorded for it.
    pub fn row(&self) -> Role {
        self.row
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    pub fn stage_file(&mut self, upload: UploadedFile) {
        self.staged.push(upload);
    }

    pub fn remove_staged(&mut self, index: usize) -> Option<UploadedFile> {
        (index < self.staged.len()).then(|| self.staged.remove(index))
    }

    pub fn staged_files(&self) -> &[UploadedFile] {
        &self.staged
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.notes != self.initial_notes || self.completed != self.initial_completed || !self.staged.is_empty()
    }

    /// Close without saving.
    ///
    /// A clean session closes right away. Otherwise `confirm` is asked and
    /// the session is handed back (`Err`) when it declines.
    pub fn cancel(self, confirm: impl FnOnce() -> bool) -> Result<(), Self> {
        if !self.has_unsaved_changes() || confirm() {
            tracing::debug!(task = %self.task, row = %self.row, "edit session discarded");
            Ok(())
        } else {
            Err(self)
        }
    }
}
