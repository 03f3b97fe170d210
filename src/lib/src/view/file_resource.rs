use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct UserPermission {
    pub role: String,
}

#[serde_as]
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FileResource {
    pub id: String,
    pub title: String,
    pub mime_type: Option<String>,
    // int64 values are sent as decimal strings
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub file_size: Option<i64>,
    pub shared: Option<bool>,
    pub modified_date: DateTime<Utc>,
    pub user_permission: Option<UserPermission>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FileList {
    #[serde(default)]
    pub items: Vec<FileResource>,
    pub next_page_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use crate::view::{FileList, FileResource};

    #[test]
    fn test_file_size_is_parsed_from_string() -> Result<(), serde_json::Error> {
        let body = r#"{
            "id": "f1",
            "title": "report.pdf",
            "mimeType": "application/pdf",
            "fileSize": "2048",
            "shared": true,
            "modifiedDate": "2015-03-04T10:11:12.000Z"
        }"#;
        let file: FileResource = serde_json::from_str(body)?;
        assert_eq!(file.file_size, Some(2048));
        assert_eq!(file.shared, Some(true));
        assert!(file.user_permission.is_none());
        Ok(())
    }

    #[test]
    fn test_last_page_has_no_token() -> Result<(), serde_json::Error> {
        let list: FileList = serde_json::from_str(r#"{ "kind": "drive#fileList" }"#)?;
        assert!(list.items.is_empty());
        assert!(list.next_page_token.is_none());
        Ok(())
    }
}
