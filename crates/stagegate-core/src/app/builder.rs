//! DashboardBuilder - Dashboard の構築とワイヤリング
//!
//! # Fail-fast 設計
//! - build() 時に設定を検証（空のキー、重複したキー）
//! - 検証に通ったら永続化された状態を読み込む（壊れていれば既定値）

use std::collections::HashSet;
use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::impls::LocalFileProvider;
use crate::ports::{Clock, FileProvider, KeyValueStore, SystemClock, UlidGenerator};
use crate::registry::TaskRegistry;

use super::dashboard::Dashboard;
use super::persistence::Persistence;

/// DashboardBuilder は Dashboard を構築
///
/// # 使用例
/// ```ignore
/// let dashboard = DashboardBuilder::new(Arc::new(InMemoryKeyValueStore::new()))
///     .with_clock(FixedClock::new(t0))
///     .build()
///     .await?;
/// ```
///
/// 省略時の既定値:
/// - registry: `TaskRegistry::standard()`
/// - clock: `SystemClock`
/// - file provider: `LocalFileProvider`（clock ベースの ULID ハンドル）
pub struct DashboardBuilder {
    store: Arc<dyn KeyValueStore>,
    registry: Option<Arc<TaskRegistry>>,
    clock: Option<Arc<dyn Clock>>,
    files: Option<Arc<dyn FileProvider>>,
    config: DashboardConfig,
}

/// BuildError は Dashboard 構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("storage key `{0}` is empty")]
    EmptyStorageKey(&'static str),

    #[error("storage key `{0}` is used by more than one namespace")]
    DuplicateStorageKey(String),
}

impl DashboardBuilder {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            registry: None,
            clock: None,
            files: None,
            config: DashboardConfig::default(),
        }
    }

    pub fn with_registry(mut self, registry: impl Into<Arc<TaskRegistry>>) -> Self {
        self.registry = Some(registry.into());
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    pub fn with_file_provider(mut self, files: impl FileProvider + 'static) -> Self {
        self.files = Some(Arc::new(files));
        self
    }

    pub fn with_config(mut self, config: DashboardConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate the configuration, then load persisted state.
    pub async fn build(self) -> Result<Dashboard, BuildError> {
        validate(&self.config)?;

        let clock: Arc<dyn Clock> = match self.clock {
            Some(clock) => clock,
            None => Arc::new(SystemClock),
        };
        let files: Arc<dyn FileProvider> = match self.files {
            Some(files) => files,
            None => Arc::new(LocalFileProvider::new(UlidGenerator::new(clock.clone()))),
        };
        let registry = self.registry.unwrap_or_default();
        let persistence = Persistence::new(self.store, self.config);

        tracing::debug!(keys = ?persistence.config().storage_keys(), "building dashboard");
        Ok(Dashboard::load(registry, persistence, clock, files).await)
    }
}

fn validate(config: &DashboardConfig) -> Result<(), BuildError> {
    let named = [
        ("sales_key", config.sales_key.as_str()),
        ("tasks_key", config.tasks_key.as_str()),
        ("completions_key", config.completions_key.as_str()),
    ];
    if let Some(&(name, _)) = named.iter().find(|(_, key)| key.trim().is_empty()) {
        return Err(BuildError::EmptyStorageKey(name));
    }

    let mut seen = HashSet::new();
    for key in config.storage_keys() {
        if !seen.insert(key) {
            return Err(BuildError::DuplicateStorageKey(key.to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PipelineStage, Role};
    use crate::impls::InMemoryKeyValueStore;

    fn store() -> Arc<dyn KeyValueStore> {
        Arc::new(InMemoryKeyValueStore::new())
    }

    #[tokio::test]
    async fn test_build_with_defaults() {
        let dashboard = DashboardBuilder::new(store()).build().await.unwrap();
        assert_eq!(dashboard.current_sales_stage(), Some(1));
        assert_eq!(dashboard.task_count(Role::AlphaSales, PipelineStage::Acquisition).total, 9);
    }

    #[tokio::test]
    async fn test_build_empty_key() {
        let config = DashboardConfig {
            tasks_key: " ".to_string(),
            ..DashboardConfig::default()
        };
        let result = DashboardBuilder::new(store()).with_config(config).build().await;
        assert!(matches!(result, Err(BuildError::EmptyStorageKey("tasks_key"))));
    }

    #[tokio::test]
    async fn test_build_duplicate_key() {
        let config = DashboardConfig {
            completions_key: "task_data".to_string(),
            ..DashboardConfig::default()
        };
        let result = DashboardBuilder::new(store()).with_config(config).build().await;
        assert!(matches!(result, Err(BuildError::DuplicateStorageKey(key)) if key == "task_data"));
    }

    #[tokio::test]
    async fn test_shared_key_allowed_when_completions_not_persisted() {
        let config = DashboardConfig {
            completions_key: "task_data".to_string(),
            persist_completions: false,
            ..DashboardConfig::default()
        };
        assert!(DashboardBuilder::new(store()).with_config(config).build().await.is_ok());
    }

    #[tokio::test]
    async fn test_build_with_custom_registry() {
        let registry = TaskRegistry::builder()
            .range(Role::AlphaSales, PipelineStage::Acquisition, 1, 3)
            .build();
        let dashboard = DashboardBuilder::new(store())
            .with_registry(registry)
            .build()
            .await
            .unwrap();
        assert_eq!(dashboard.task_count(Role::AlphaSales, PipelineStage::Acquisition).total, 3);
        assert_eq!(dashboard.task_count(Role::AlphaSales, PipelineStage::Eho).total, 0);
    }
}
