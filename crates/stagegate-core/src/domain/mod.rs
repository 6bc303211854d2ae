//! Domain model (ids, roles, stages, records, ...).
//!
//! ここに置く型は純粋なデータで、永続化や時刻取得には依存しません。
//! 時刻は呼び出し側（app 層）が `Clock` から取得して渡します。

pub mod ids;
pub mod role;
pub mod stage;
pub mod timestamp;
pub mod completion;
pub mod detail;
pub mod sales;
pub mod access;
pub mod progress;
pub mod errors;

pub use access::{Denial, Interaction, RowAccess, User};
pub use completion::CompletionRecord;
pub use detail::{FileAttachment, TaskDetailPatch, TaskDetailRecord};
pub use errors::{DashboardError, ParseRoleError, ParseStageError};
pub use ids::TaskId;
pub use progress::{ProgressLevel, TaskCount};
pub use role::Role;
pub use sales::{SALES_STAGE_COUNT, SalesStage};
pub use stage::PipelineStage;
