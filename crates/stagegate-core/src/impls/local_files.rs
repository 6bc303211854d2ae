//! LocalFileProvider - アップロードをプロセス内に保持する FileProvider
//!
//! URL は `blob:stagegate/<ulid>` 形式。ブラウザのオブジェクト URL と同様に
//! プロセスが終わると中身は失われ、記録された URL だけが残ります。

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::FileAttachment;
use crate::ports::{FileProvider, HandleGenerator, UploadedFile};

const URL_PREFIX: &str = "blob:stagegate/";

pub struct LocalFileProvider<G> {
    handles: G,
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl<G: HandleGenerator> LocalFileProvider<G> {
    pub fn new(handles: G) -> Self {
        Self {
            handles,
            blobs: Mutex::new(HashMap::new()),
        }
    }

    /// Bytes behind a URL issued by this provider.
    pub fn fetch(&self, url: &str) -> Option<Vec<u8>> {
        self.blobs().get(url).cloned()
    }

    pub fn len(&self) -> usize {
        self.blobs().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn blobs(&self) -> MutexGuard<'_, HashMap<String, Vec<u8>>> {
        // 中身は単純な map なので poison されても使い続けられる
        self.blobs.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<G: HandleGenerator> FileProvider for LocalFileProvider<G> {
    fn register(&self, upload: UploadedFile) -> FileAttachment {
        let url = format!("{URL_PREFIX}{}", self.handles.generate());
        let attachment = FileAttachment {
            name: upload.name.clone(),
            url: url.clone(),
            mime_type: upload.mime_type.clone(),
            size: upload.size(),
        };
        self.blobs().insert(url, upload.bytes);
        tracing::debug!(name = %attachment.name, url = %attachment.url, size = attachment.size, "file registered");
        attachment
    }

    fn release(&self, url: &str) {
        if self.blobs().remove(url).is_some() {
            tracing::debug!(url, "file released");
        }
    }
}
