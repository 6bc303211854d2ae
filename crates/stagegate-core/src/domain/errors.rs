//! Errors - エラー型
//!
//! # 分類
//! - 永続化データの破損: エラーにせず既定値にフォールバック（warn ログのみ）
//! - 永続化の書き込み失敗: tracker / completion は warn ログのみ、task detail の保存は呼び出し側に返す
//! - ロック中・他 role のタスクへの操作: エラーではなく `Interaction::Denied`

use thiserror::Error;

use crate::ports::StoreError;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("failed to persist `{key}`")]
    Persist {
        key: String,
        #[source]
        source: StoreError,
    },

    #[error("failed to encode `{key}`")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role `{0}`")]
pub struct ParseRoleError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown pipeline stage `{0}`")]
pub struct ParseStageError(pub String);
