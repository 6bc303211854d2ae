//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **InMemoryKeyValueStore**: テスト・デモ用の永続化（プロセス内のみ）
//! - **JsonFileStore**: ディレクトリに 1 名前空間 1 ファイルで保存
//! - **LocalFileProvider**: アップロードをメモリに保持し `blob:` URL を発行

pub mod file_kv;
pub mod inmem_kv;
pub mod local_files;

// 主要な型を再エクスポート
pub use self::file_kv::JsonFileStore;
pub use self::inmem_kv::InMemoryKeyValueStore;
pub use self::local_files::LocalFileProvider;
