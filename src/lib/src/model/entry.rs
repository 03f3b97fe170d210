use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::FOLDER_MIME_TYPE;
use crate::view::FileResource;

/// A snapshot of one remote file or folder as returned by a single listing call
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: String,
    pub name: String,
    pub is_dir: bool,
    pub shared: bool,
    pub size: i64,
    pub modified: DateTime<Utc>,
    /// Role of the current user on the entry, absent when the remote did not send one
    pub user_role: Option<String>,
}

impl Entry {
    pub fn path_under(&self, parent: &str) -> String {
        format!("{parent}/{}", self.name)
    }
}

impl From<FileResource> for Entry {
    fn from(file: FileResource) -> Entry {
        Entry {
            is_dir: file.mime_type.as_deref() == Some(FOLDER_MIME_TYPE),
            id: file.id,
            name: file.title,
            shared: file.shared.unwrap_or(false),
            size: file.file_size.unwrap_or(0),
            modified: file.modified_date,
            user_role: file.user_permission.map(|p| p.role),
        }
    }
}
