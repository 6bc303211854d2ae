//! DashboardConfig - 永続化の名前空間などの設定
//!
//! # TOML の例
//! ```toml
//! sales_key = "sales_pipeline_state"
//! tasks_key = "task_data"
//! completions_key = "task_completions"
//! persist_completions = true
//! ```
//!
//! 省略したキーは既定値になります（空ファイルも有効）。

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_SALES_KEY: &str = "sales_pipeline_state";
pub const DEFAULT_TASKS_KEY: &str = "task_data";
pub const DEFAULT_COMPLETIONS_KEY: &str = "task_completions";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Namespace of the sales stage list.
    pub sales_key: String,
    /// Namespace of the task detail map.
    pub tasks_key: String,
    /// Namespace of the completion records.
    pub completions_key: String,
    /// When false, completions live in memory only and start empty on load.
    pub persist_completions: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            sales_key: DEFAULT_SALES_KEY.to_string(),
            tasks_key: DEFAULT_TASKS_KEY.to_string(),
            completions_key: DEFAULT_COMPLETIONS_KEY.to_string(),
            persist_completions: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config")]
    Parse(#[from] toml::de::Error),
}

impl DashboardConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Namespaces in use, in load order.
    pub fn storage_keys(&self) -> Vec<&str> {
        let mut keys = vec![self.sales_key.as_str(), self.tasks_key.as_str()];
        if self.persist_completions {
            keys.push(self.completions_key.as_str());
        }
        keys
    }
}
