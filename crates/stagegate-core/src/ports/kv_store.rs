//! KeyValueStore port - 永続化の抽象化
//!
//! ブラウザの localStorage と同じ形: 名前空間（key）ごとに 1 つの JSON 文字列。
//! 値のエンコード／デコードは app 層の責務で、ここは文字列だけを扱います。
//!
//! # 実装
//! - **InMemoryKeyValueStore**: テスト・デモ用
//! - **JsonFileStore**: ディレクトリに `<key>.json` として保存

use std::io;

use async_trait::async_trait;
use thiserror::Error;

/// 永続化層のエラー
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on `{key}`")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid storage key `{0}`")]
    InvalidKey(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Namespaced string storage.
///
/// # 契約
/// - 存在しないキーの `get` は `Ok(None)`（エラーではない）
/// - `set` が `Ok` を返した後の `get` は、その値を返す
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
}
