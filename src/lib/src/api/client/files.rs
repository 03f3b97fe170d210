//! Lookups and paginated listings against the remote `/files` resource
//!

use crate::api::client;
use crate::api::endpoint;
use crate::constants;
use crate::error::DriveError;
use crate::model::list_request::escape_query_value;
use crate::model::{Entry, EntryPage, ListRequest, RemoteDrive, RemotePath};
use crate::view::{FileList, FileResource};

pub async fn get(remote: &RemoteDrive, id: &str) -> Result<Entry, DriveError> {
    let url = endpoint::file_url(remote, id)?;
    log::debug!("api::client::files::get {url}");

    let client = client::new_for_remote(remote)?;
    let res = client.get(url.clone()).send().await?;
    let body = client::parse_json_body(&url, res).await?;
    let response: Result<FileResource, serde_json::Error> = serde_json::from_str(&body);
    match response {
        Ok(file) => Ok(Entry::from(file)),
        Err(err) => Err(DriveError::basic_str(format!(
            "api::client::files::get error parsing response from {url}\n\nErr {err:?} \n\n{body}"
        ))),
    }
}

/// Fetches a single page of children, one attempt, no retries
pub async fn list(remote: &RemoteDrive, request: &ListRequest) -> Result<EntryPage, DriveError> {
    let query = request.query();
    query_page(remote, &query, request.page_size, request.page_token.as_deref()).await
}

async fn query_page(
    remote: &RemoteDrive,
    query: &str,
    max_results: usize,
    page_token: Option<&str>,
) -> Result<EntryPage, DriveError> {
    let url = endpoint::files_url(remote)?;
    let max_results = max_results.to_string();
    let mut params = vec![("q", query), ("maxResults", max_results.as_str())];
    if let Some(token) = page_token {
        params.push(("pageToken", token));
    }
    log::debug!("api::client::files::query_page {url} {params:?}");

    let client = client::new_for_remote(remote)?;
    let res = client.get(url.clone()).query(&params).send().await?;
    let body = client::parse_json_body(&url, res).await?;
    let response: Result<FileList, serde_json::Error> = serde_json::from_str(&body);
    match response {
        Ok(list) => {
            let entries = list.items.into_iter().map(Entry::from).collect();
            Ok(EntryPage::new(entries, list.next_page_token))
        }
        Err(err) => Err(DriveError::basic_str(format!(
            "api::client::files::list error parsing response from {url}\n\nErr {err:?} \n\n{body}"
        ))),
    }
}

/// Resolves a "/" rooted path one segment at a time, starting at the root folder
pub async fn find_by_path(remote: &RemoteDrive, path: &RemotePath) -> Result<Entry, DriveError> {
    let mut current = get(remote, constants::ROOT_FOLDER_ID).await?;
    for segment in path.segments() {
        match find_child_by_title(remote, &current.id, segment).await? {
            Some(child) => current = child,
            None => {
                log::debug!("find_by_path {path} stopped at segment {segment:?}");
                return Err(DriveError::remote_path_not_found());
            }
        }
    }
    Ok(current)
}

async fn find_child_by_title(
    remote: &RemoteDrive,
    parent_id: &str,
    title: &str,
) -> Result<Option<Entry>, DriveError> {
    let query = title_query(parent_id, title);
    let page = query_page(remote, &query, 1, None).await?;
    Ok(page.entries.into_iter().next())
}

pub fn title_query(parent_id: &str, title: &str) -> String {
    format!(
        "'{}' in parents and title = '{}' and trashed=false",
        escape_query_value(parent_id),
        escape_query_value(title)
    )
}
