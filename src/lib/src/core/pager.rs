use crate::api::RemoteStore;
use crate::error::DriveError;
use crate::model::{Entry, ListRequest};

/// The pages of children under one parent, fetched lazily one at a time.
///
/// A failed fetch leaves the pager untouched so the same page can be asked for again.
#[derive(Debug, Clone)]
pub struct Pager {
    request: ListRequest,
    started: bool,
}

impl Pager {
    pub fn new(parent_id: impl AsRef<str>, page_size: usize) -> Pager {
        Pager {
            request: ListRequest::first_page(parent_id, page_size),
            started: false,
        }
    }

    pub fn parent_id(&self) -> &str {
        &self.request.parent_id
    }

    pub fn is_first_page(&self) -> bool {
        !self.started
    }

    pub fn has_next(&self) -> bool {
        !self.started || self.request.page_token.is_some()
    }

    /// None once the remote stops handing out continuation tokens
    pub async fn next_page(
        &mut self,
        remote: &dyn RemoteStore,
    ) -> Result<Option<Vec<Entry>>, DriveError> {
        if !self.has_next() {
            return Ok(None);
        }

        let page = remote.list_children(&self.request).await?;
        log::debug!(
            "Pager::next_page parent {} got {} entries, more: {}",
            self.request.parent_id,
            page.entries.len(),
            page.has_more()
        );
        self.started = true;
        self.request.page_token = page.next_page_token;
        Ok(Some(page.entries))
    }

    pub fn restart(&mut self) {
        self.started = false;
        self.request.page_token = None;
    }
}
