//! App - アプリケーション層
//!
//! ports と store を組み合わせてユースケースを実装します。
//!
//! # 主要コンポーネント
//! - **DashboardBuilder**: 依存の注入と起動時検証、永続化状態の読み込み
//! - **Dashboard**: ユーザー操作（開く・完了・保存）とクエリ
//! - **TaskEditSession**: タスク詳細ビューの下書き
//! - **MatrixStatus**: マトリクス全体のスナップショット

pub mod builder;
pub mod dashboard;
mod persistence;
pub mod session;
pub mod status;

// 主要な型を再エクスポート
pub use self::builder::{BuildError, DashboardBuilder};
pub use self::dashboard::Dashboard;
pub use self::session::TaskEditSession;
pub use self::status::{CellStatus, MatrixStatus, RowStatus, SalesStatus};
