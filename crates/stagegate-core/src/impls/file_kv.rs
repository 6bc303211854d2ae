//! JsonFileStore - ディレクトリベースの key-value ストア
//!
//! # レイアウト
//! ```text
//! <root>/
//!   sales_pipeline_state.json
//!   task_data.json
//!   task_completions.json
//! ```
//!
//! 書き込みは `<key>.json.tmp` に書いてから rename します（途中で落ちても
//! 既存のファイルは壊れない）。

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::ports::{KeyValueStore, StoreError};

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// The directory is created lazily on the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

fn io_error(key: &str) -> impl FnOnce(io::Error) -> StoreError + '_ {
    move |source| StoreError::Io {
        key: key.to_string(),
        source,
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error(key)(e)),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root).await.map_err(io_error(key))?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value.as_bytes()).await.map_err(io_error(key))?;
        fs::rename(&tmp, &path).await.map_err(io_error(key))?;

        tracing::trace!(key, path = %path.display(), "state written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[tokio::test]
    async fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert_eq!(store.get("task_data").await.unwrap(), None);
    }

    #[tokio::test]
    async fn roundtrip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("state"));

        store.set("task_data", r#"{"5":{}}"#.to_string()).await.unwrap();
        store.set("task_data", r#"{"6":{}}"#.to_string()).await.unwrap();

        assert_eq!(store.get("task_data").await.unwrap().as_deref(), Some(r#"{"6":{}}"#));
        assert!(dir.path().join("state/task_data.json").exists());
        assert!(!dir.path().join("state/task_data.json.tmp").exists());
    }

    #[tokio::test]
    async fn separate_stores_share_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        JsonFileStore::new(dir.path())
            .set("sales_pipeline_state", "[]".to_string())
            .await
            .unwrap();

        let reopened = JsonFileStore::new(dir.path());
        assert_eq!(reopened.get("sales_pipeline_state").await.unwrap().as_deref(), Some("[]"));
    }

    #[rstest]
    #[case("")]
    #[case("../escape")]
    #[case("nested/key")]
    #[case(".hidden")]
    #[tokio::test]
    async fn rejects_unsafe_keys(#[case] key: &str) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert!(matches!(store.get(key).await, Err(StoreError::InvalidKey(_))));
        assert!(matches!(store.set(key, "x".to_string()).await, Err(StoreError::InvalidKey(_))));
    }
}
