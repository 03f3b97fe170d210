use crate::constants::DEFAULT_PAGE_SIZE;
use crate::model::Entry;

/// One page worth of children for a parent folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub parent_id: String,
    /// None asks for the first page
    pub page_token: Option<String>,
    pub page_size: usize,
}

impl ListRequest {
    pub fn first_page(parent_id: impl AsRef<str>, page_size: usize) -> ListRequest {
        ListRequest {
            parent_id: parent_id.as_ref().to_string(),
            page_token: None,
            page_size,
        }
    }

    pub fn with_page_token(mut self, token: Option<String>) -> ListRequest {
        self.page_token = token.filter(|t| !t.is_empty());
        self
    }

    /// Direct children that are not in the trash
    pub fn query(&self) -> String {
        format!(
            "'{}' in parents and trashed=false",
            escape_query_value(&self.parent_id)
        )
    }
}

impl Default for ListRequest {
    fn default() -> Self {
        ListRequest::first_page("", DEFAULT_PAGE_SIZE)
    }
}

/// Escapes a value for use inside a single quoted query literal
pub fn escape_query_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

#[derive(Debug, Clone, Default)]
pub struct EntryPage {
    pub entries: Vec<Entry>,
    pub next_page_token: Option<String>,
}

impl EntryPage {
    pub fn new(entries: Vec<Entry>, next_page_token: Option<String>) -> EntryPage {
        EntryPage {
            entries,
            next_page_token: next_page_token.filter(|t| !t.is_empty()),
        }
    }

    pub fn has_more(&self) -> bool {
        self.next_page_token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use crate::model::list_request::escape_query_value;
    use crate::model::{EntryPage, ListRequest};

    #[test]
    fn test_query_filters_children_not_trashed() {
        let req = ListRequest::first_page("0Bxyz", 30);
        assert_eq!(req.query(), "'0Bxyz' in parents and trashed=false");
        assert_eq!(req.page_token, None);
    }

    #[test]
    fn test_empty_tokens_mean_no_more_pages() {
        let req = ListRequest::first_page("id", 30).with_page_token(Some(String::new()));
        assert_eq!(req.page_token, None);

        let page = EntryPage::new(vec![], Some(String::new()));
        assert!(!page.has_more());
        let page = EntryPage::new(vec![], Some(String::from("t2")));
        assert!(page.has_more());
    }

    #[test]
    fn test_escape_query_value() {
        assert_eq!(escape_query_value("it's"), "it\\'s");
        assert_eq!(escape_query_value("a\\b"), "a\\\\b");
    }
}
