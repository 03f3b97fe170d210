use async_trait::async_trait;

use crate::api;
use crate::error::DriveError;
use crate::model::{Entry, EntryPage, ListRequest, RemoteDrive, RemotePath};

/// What the listing code needs from a remote
#[async_trait]
pub trait RemoteStore: Send + Sync {
    async fn find_by_path(&self, path: &RemotePath) -> Result<Entry, DriveError>;
    async fn list_children(&self, request: &ListRequest) -> Result<EntryPage, DriveError>;
}

#[async_trait]
impl RemoteStore for RemoteDrive {
    async fn find_by_path(&self, path: &RemotePath) -> Result<Entry, DriveError> {
        api::client::files::find_by_path(self, path).await
    }

    async fn list_children(&self, request: &ListRequest) -> Result<EntryPage, DriveError> {
        api::client::files::list(self, request).await
    }
}
