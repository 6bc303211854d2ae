//! Dashboard - アプリケーションサービス
//!
//! Registry・各 store・営業トラッカーを 1 つにまとめ、ユーザー操作を
//! ユースケース単位で公開します。
//!
//! # 操作の流れ
//! ```text
//! open_task ──► gate ─► unlock ─► (alpha-sales, task ≤ 8) set_current ─► TaskEditSession
//! commit_session ──► gate ─► unlock ─► register files ─► save_task ─► set_task_completed
//!                   （保存に失敗したら files を release し、セッションはそのまま）
//! set_task_completed ──► gate ─► unlock ─► (completed, alpha-sales, task ≤ 8) advance
//!                                        ─► completion upsert/remove ─► persist
//! ```
//!
//! 拒否された操作は `Interaction::Denied` を返し、状態は一切変わりません。

use std::sync::Arc;

use crate::domain::{
    DashboardError, Denial, FileAttachment, Interaction, PipelineStage, Role, RowAccess, SalesStage, TaskCount,
    TaskDetailPatch, TaskDetailRecord, TaskId, User,
};
use crate::ports::{Clock, FileProvider};
use crate::registry::{TaskInfo, TaskRegistry};
use crate::store::{CompletionStore, SalesStageTracker, TaskDetailStore, UnlockEvaluator};

use super::persistence::Persistence;
use super::session::TaskEditSession;
use super::status::{CellStatus, MatrixStatus, RowStatus, SalesStatus};

pub struct Dashboard {
    registry: Arc<TaskRegistry>,
    persistence: Persistence,
    clock: Arc<dyn Clock>,
    files: Arc<dyn FileProvider>,
    completions: CompletionStore,
    details: TaskDetailStore,
    sales: SalesStageTracker,
}

impl Dashboard {
    pub(crate) async fn load(
        registry: Arc<TaskRegistry>,
        persistence: Persistence,
        clock: Arc<dyn Clock>,
        files: Arc<dyn FileProvider>,
    ) -> Self {
        let sales = persistence.load_sales().await;
        let details = persistence.load_details().await;
        let completions = persistence.load_completions().await;
        tracing::info!(
            tasks = details.len(),
            completions = completions.len(),
            current_sales_stage = ?sales.current_stage(),
            "dashboard state loaded"
        );
        Self {
            registry,
            persistence,
            clock,
            files,
            completions,
            details,
            sales,
        }
    }

    pub fn registry(&self) -> &TaskRegistry {
        &self.registry
    }

    // ---- queries ----

    pub fn row_access(&self, user: Option<&User>, row: Role) -> RowAccess {
        RowAccess::evaluate(user, row)
    }

    /// Whether `task` is unlocked in `row` as seen by `user`.
    pub fn is_task_unlocked(&self, user: Option<&User>, task: TaskId, row: Role) -> bool {
        let privileged = user.is_some_and(User::is_privileged);
        self.evaluator().is_unlocked(task, row, privileged)
    }

    pub fn blocking_prerequisites(&self, task: TaskId, row: Role) -> Vec<TaskId> {
        self.evaluator().blocking_prerequisites(task, row)
    }

    pub fn is_task_completed(&self, task: TaskId, role: Role) -> bool {
        self.completions.is_completed(task, role)
    }

    pub fn task_count(&self, role: Role, stage: PipelineStage) -> TaskCount {
        self.completions.count_completed(&self.registry, role, stage)
    }

    pub fn get_task(&self, task: TaskId) -> Option<&TaskDetailRecord> {
        self.details.get(task)
    }

    pub fn task_info(&self, task: TaskId) -> TaskInfo {
        self.registry.info(task)
    }

    pub fn sales_stages(&self) -> &[SalesStage] {
        self.sales.stages()
    }

    pub fn current_sales_stage(&self) -> Option<u8> {
        self.sales.current_stage()
    }

    pub fn status(&self, user: Option<&User>) -> MatrixStatus {
        let rows = self
            .registry
            .rows()
            .iter()
            .map(|&role| RowStatus {
                role,
                label: role.label(),
                access: self.row_access(user, role),
                cells: self
                    .registry
                    .stages()
                    .iter()
                    .map(|&stage| {
                        CellStatus::new(stage, self.registry.has_access(role, stage), self.task_count(role, stage))
                    })
                    .collect(),
            })
            .collect();
        MatrixStatus {
            rows,
            sales: SalesStatus {
                current_stage: self.current_sales_stage(),
                stages: self.sales_stages().to_vec(),
            },
        }
    }

    // ---- task details ----

    /// Merge `patch` into the task's record and persist it.
    ///
    /// The in-memory record only changes once the write succeeded.
    pub async fn save_task(&mut self, task: TaskId, patch: TaskDetailPatch) -> Result<&TaskDetailRecord, DashboardError> {
        let record = self.details.preview(task, patch, self.clock.now());
        let mut next = self.details.clone();
        next.insert(record.clone());

        if let Err(e) = self.persistence.save_details(&next).await {
            tracing::error!(%task, error = %e, "task save failed");
            return Err(e);
        }
        tracing::info!(%task, "task saved");
        Ok(self.details.insert(record))
    }

    // ---- sales pipeline ----

    pub async fn update_stage(&mut self, id: u8) -> bool {
        let changed = self.sales.set_current(id);
        if changed {
            tracing::debug!(stage = id, "sales stage set current");
            self.persistence.save_sales(&self.sales).await;
        }
        changed
    }

    pub async fn complete_stage(&mut self, id: u8) -> bool {
        let changed = self.sales.advance(id);
        if changed {
            tracing::debug!(stage = id, current = ?self.sales.current_stage(), "sales stage completed");
            self.persistence.save_sales(&self.sales).await;
        }
        changed
    }

    // ---- interactions ----

    /// Open the detail view of `task` in `row`.
    pub async fn open_task(&mut self, user: Option<&User>, task: TaskId, row: Role) -> Interaction<TaskEditSession> {
        if let Err(denial) = self.check(user, task, row) {
            return Interaction::Denied(denial);
        }
        if let Some(stage) = SalesStageTracker::stage_for_task(row, task) {
            self.update_stage(stage).await;
        }
        let notes = self.details.get(task).map(|r| r.notes.clone()).unwrap_or_default();
        let completed = self.completions.is_completed(task, row);
        Interaction::Applied(TaskEditSession::new(task, row, notes, completed))
    }

    /// Mark `task` completed (or not) for `row`.
    pub async fn set_task_completed(
        &mut self,
        user: Option<&User>,
        task: TaskId,
        row: Role,
        completed: bool,
    ) -> Interaction {
        if let Err(denial) = self.check(user, task, row) {
            return Interaction::Denied(denial);
        }
        if completed && let Some(stage) = SalesStageTracker::stage_for_task(row, task) {
            self.complete_stage(stage).await;
        }
        self.completions
            .set_completed(task, row, completed, self.clock.now());
        tracing::info!(%task, %row, completed, "task completion updated");
        self.persistence.save_completions(&self.completions).await;
        Interaction::Applied(())
    }

    /// Save a session: upload staged files, append them to the task's
    /// attachments, save the record and apply the completion flag.
    ///
    /// The session is only borrowed. When the detail save fails nothing is
    /// applied, the uploads are released and the same session can be
    /// committed again.
    pub async fn commit_session(
        &mut self,
        user: Option<&User>,
        session: &TaskEditSession,
    ) -> Result<Interaction<TaskDetailRecord>, DashboardError> {
        let task = session.task();
        let row = session.row();
        if let Err(denial) = self.check(user, task, row) {
            return Ok(Interaction::Denied(denial));
        }

        let mut patch = TaskDetailPatch {
            notes: Some(session.notes().to_string()),
            completed: Some(session.completed()),
            files: None,
        };
        let uploaded: Vec<FileAttachment> = session
            .staged_files()
            .iter()
            .map(|f| self.files.register(f.clone()))
            .collect();
        if !uploaded.is_empty() {
            let mut files = self.details.get(task).map(|r| r.files.clone()).unwrap_or_default();
            files.extend(uploaded.iter().cloned());
            patch.files = Some(files);
        }

        let record = match self.save_task(task, patch).await {
            Ok(record) => record.clone(),
            Err(e) => {
                for attachment in &uploaded {
                    self.files.release(&attachment.url);
                }
                return Err(e);
            }
        };
        // 直前の check を通っているので拒否されない
        let _ = self.set_task_completed(user, task, row, session.completed()).await;
        Ok(Interaction::Applied(record))
    }

    fn check(&self, user: Option<&User>, task: TaskId, row: Role) -> Result<(), Denial> {
        let Some(user) = user else {
            return Err(Denial::SignedOut);
        };
        if !self.row_access(Some(user), row).can_interact {
            tracing::debug!(%task, %row, role = %user.role, "interaction on another row ignored");
            return Err(Denial::NotRowOwner);
        }
        if !self.is_task_unlocked(Some(user), task, row) {
            tracing::debug!(
                %task,
                %row,
                blocking = ?self.blocking_prerequisites(task, row),
                "interaction on locked task ignored"
            );
            return Err(Denial::Locked);
        }
        Ok(())
    }

    fn evaluator(&self) -> UnlockEvaluator<'_> {
        UnlockEvaluator::new(&self.registry, &self.completions)
    }
}
