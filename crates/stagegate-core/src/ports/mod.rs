//! Ports - 抽象化レイヤー
//!
//! Dashboard が外部に依存する箇所を trait として定義します。
//! - 永続化（localStorage 相当の key-value ストア）
//! - 時刻
//! - アップロードされたファイルのハンドル発行
//!
//! 実装は `impls` に置きます。

pub mod clock;
pub mod file_provider;
pub mod handle_generator;
pub mod kv_store;

// 主要な trait を再エクスポート
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::file_provider::{FileProvider, UploadedFile};
pub use self::handle_generator::{HandleGenerator, UlidGenerator};
pub use self::kv_store::{KeyValueStore, StoreError};
