//! Persistence - KeyValueStore と store 群の間の JSON 変換
//!
//! # 方針
//! - 読み込み: キーがない・読めない・JSON が壊れている → 既定値（warn ログ）
//! - 書き込み: sales / completions はベストエフォート（warn ログのみ）、
//!   task detail は呼び出し側にエラーを返す

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::DashboardConfig;
use crate::domain::{CompletionRecord, DashboardError, SalesStage};
use crate::ports::KeyValueStore;
use crate::store::{CompletionStore, SalesStageTracker, TaskDetailStore};

#[derive(Clone)]
pub(crate) struct Persistence {
    kv: Arc<dyn KeyValueStore>,
    config: DashboardConfig,
}

impl Persistence {
    pub(crate) fn new(kv: Arc<dyn KeyValueStore>, config: DashboardConfig) -> Self {
        Self { kv, config }
    }

    pub(crate) fn config(&self) -> &DashboardConfig {
        &self.config
    }

    async fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.kv.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key, "no persisted state, using defaults");
                return None;
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "failed to read persisted state, using defaults");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "malformed persisted state, using defaults");
                None
            }
        }
    }

    async fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), DashboardError> {
        let json = serde_json::to_string(value).map_err(|source| DashboardError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.kv
            .set(key, json)
            .await
            .map_err(|source| DashboardError::Persist {
                key: key.to_string(),
                source,
            })
    }

    async fn write_best_effort<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(e) = self.write(key, value).await {
            tracing::warn!(key, error = %e, "failed to persist state; keeping it in memory only");
        }
    }

    pub(crate) async fn load_sales(&self) -> SalesStageTracker {
        let Some(stages) = self.read::<Vec<SalesStage>>(&self.config.sales_key).await else {
            return SalesStageTracker::default();
        };
        SalesStageTracker::from_stages(stages).unwrap_or_else(|| {
            tracing::warn!(key = %self.config.sales_key, "sales stage list is not stages 1..=8, using defaults");
            SalesStageTracker::default()
        })
    }

    pub(crate) async fn load_details(&self) -> TaskDetailStore {
        self.read(&self.config.tasks_key).await.unwrap_or_default()
    }

    pub(crate) async fn load_completions(&self) -> CompletionStore {
        if !self.config.persist_completions {
            return CompletionStore::default();
        }
        self.read::<Vec<CompletionRecord>>(&self.config.completions_key)
            .await
            .map(CompletionStore::from_records)
            .unwrap_or_default()
    }

    pub(crate) async fn save_sales(&self, tracker: &SalesStageTracker) {
        self.write_best_effort(&self.config.sales_key, tracker.stages()).await;
    }

    pub(crate) async fn save_completions(&self, completions: &CompletionStore) {
        if self.config.persist_completions {
            self.write_best_effort(&self.config.completions_key, &completions.records())
                .await;
        }
    }

    pub(crate) async fn save_details(&self, details: &TaskDetailStore) -> Result<(), DashboardError> {
        self.write(&self.config.tasks_key, details).await
    }
}
