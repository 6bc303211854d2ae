//! stagegate-core
//!
//! Role-gated task matrix: dependency unlocking, completion state and the
//! sales stage pointer behind the stage dashboard.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（ids, role, stage, detail, completion, sales, access, progress, errors）
//! - **registry**: 静的な設定（stage 範囲、依存関係、タスクカタログ）
//! - **store**: CompletionStore / TaskDetailStore / SalesStageTracker と UnlockEvaluator
//! - **ports**: 抽象化レイヤー（KeyValueStore, Clock, FileProvider, HandleGenerator）
//! - **impls**: ports の実装（InMemoryKeyValueStore, JsonFileStore, LocalFileProvider）
//! - **app**: アプリケーション層（Dashboard, DashboardBuilder, TaskEditSession, MatrixStatus）
//! - **config**: DashboardConfig（storage key など）

pub mod domain;
pub mod registry;
pub mod store;
pub mod ports;
pub mod impls;
pub mod app;
pub mod config;

pub use app::{Dashboard, DashboardBuilder, MatrixStatus, TaskEditSession};
pub use config::DashboardConfig;
pub use domain::{
    Denial, FileAttachment, Interaction, PipelineStage, Role, RowAccess, TaskCount, TaskDetailPatch,
    TaskDetailRecord, TaskId, User,
};
pub use registry::TaskRegistry;
