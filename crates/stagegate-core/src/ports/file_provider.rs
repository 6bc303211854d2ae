//! FileProvider port - アップロードされたファイルの受け口
//!
//! Dashboard はファイルの中身を保持しません。プロバイダが発行した
//! URL とメタデータ（[`FileAttachment`]）だけをタスク詳細に記録します。

use std::sync::Arc;

use crate::domain::FileAttachment;

/// File picked by the user, before it has a handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Turns an upload into an addressable attachment.
///
/// 同期的な操作です（ハンドル発行のみ。オブジェクト URL と同じ）。
pub trait FileProvider: Send + Sync {
    fn register(&self, upload: UploadedFile) -> FileAttachment;

    /// Drop a handle issued by `register` that ended up unused
    /// (e.g. the save that would have recorded it failed).
    fn release(&self, url: &str);
}

impl<F: FileProvider + ?Sized> FileProvider for Arc<F> {
    fn register(&self, upload: UploadedFile) -> FileAttachment {
        (**self).register(upload)
    }

    fn release(&self, url: &str) {
        (**self).release(url)
    }
}
