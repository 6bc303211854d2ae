//! Task detail records: notes, attachments and the detail-view completion flag.
//!
//! # 永続化フォーマット
//! ```json
//! {"id": 5, "notes": "", "files": [{"name": "a.pdf", "url": "blob:...", "type": "application/pdf", "size": 10}],
//!  "completed": false, "lastModified": "2024-01-01T12:00:00.000Z"}
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::TaskId;

/// Metadata of one attached file. The bytes live behind `url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAttachment {
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub size: u64,
}

/// Per-task detail, shared by every role (keyed by task id only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDetailRecord {
    pub id: TaskId,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub files: Vec<FileAttachment>,
    #[serde(default)]
    pub completed: bool,
    #[serde(with = "super::timestamp")]
    pub last_modified: DateTime<Utc>,
}

impl TaskDetailRecord {
    /// Record with the documented defaults (`""`, `[]`, `false`).
    pub fn empty(id: TaskId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            notes: String::new(),
            files: Vec::new(),
            completed: false,
            last_modified: now,
        }
    }

    /// Merge `patch` over `self`. Fields the patch omits keep their value;
    /// `last_modified` is always replaced.
    pub fn merged(mut self, patch: TaskDetailPatch, now: DateTime<Utc>) -> Self {
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(files) = patch.files {
            self.files = files;
        }
        self.last_modified = now;
        self
    }
}

/// Partial update for [`TaskDetailRecord`]. `files` replaces the whole list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDetailPatch {
    pub notes: Option<String>,
    pub completed: Option<bool>,
    pub files: Option<Vec<FileAttachment>>,
}

impl TaskDetailPatch {
    pub fn notes(notes: impl Into<String>) -> Self {
        Self {
            notes: Some(notes.into()),
            ..Self::default()
        }
    }

    pub fn files(files: Vec<FileAttachment>) -> Self {
        Self {
            files: Some(files),
            ..Self::default()
        }
    }

    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_none() && self.completed.is_none() && self.files.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn attachment(name: &str) -> FileAttachment {
        FileAttachment {
            name: name.to_string(),
            url: format!("blob:test/{name}"),
            mime_type: "text/plain".to_string(),
            size: 4,
        }
    }

    #[test]
    fn merge_keeps_fields_the_patch_omits() {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let t1 = t0 + Duration::minutes(5);

        let record = TaskDetailRecord::empty(TaskId::new(5), t0)
            .merged(TaskDetailPatch::files(vec![attachment("brief.txt")]), t0)
            .merged(TaskDetailPatch::notes("x"), t1);

        assert_eq!(record.notes, "x");
        assert_eq!(record.files, vec![attachment("brief.txt")]);
        assert!(!record.completed);
        assert_eq!(record.last_modified, t1);
    }

    #[test]
    fn empty_patch_still_touches_timestamp() {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let t1 = t0 + Duration::seconds(1);
        let record = TaskDetailRecord::empty(TaskId::new(1), t0).merged(TaskDetailPatch::default(), t1);
        assert_eq!(record.last_modified, t1);
    }

    #[test]
    fn json_shape_matches_persisted_format() {
        let t = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let record = TaskDetailRecord::empty(TaskId::new(5), t)
            .merged(TaskDetailPatch::files(vec![attachment("a.txt")]), t);

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 5,
                "notes": "",
                "files": [{"name": "a.txt", "url": "blob:test/a.txt", "type": "text/plain", "size": 4}],
                "completed": false,
                "lastModified": "2024-01-01T12:00:00.000Z"
            })
        );
    }

    #[test]
    fn missing_optional_fields_use_defaults() {
        let json = r#"{"id": 9, "lastModified": "2024-03-01T10:00:00.123Z"}"#;
        let record: TaskDetailRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.notes, "");
        assert!(record.files.is_empty());
        assert!(!record.completed);
        assert_eq!(record.last_modified.timestamp_subsec_millis(), 123);
    }
}
