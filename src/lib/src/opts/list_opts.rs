use std::path::PathBuf;

use crate::constants::{DEFAULT_DEPTH, DEFAULT_PAGE_SIZE};

/// Options for `drive ls`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListOpts {
    /// Local style paths, an empty list means the current directory
    pub sources: Vec<PathBuf>,
    /// Levels to descend, negative is unlimited and 0 lists nothing
    pub depth: i32,
    pub page_size: usize,
    /// Render sizes as "1KB" instead of raw byte counts
    pub human: bool,
}

impl Default for ListOpts {
    fn default() -> Self {
        ListOpts {
            sources: vec![],
            depth: DEFAULT_DEPTH,
            page_size: DEFAULT_PAGE_SIZE,
            human: true,
        }
    }
}

impl ListOpts {
    pub fn from_sources(sources: Vec<PathBuf>) -> ListOpts {
        ListOpts {
            sources,
            ..ListOpts::default()
        }
    }

    pub fn with_depth(mut self, depth: i32) -> ListOpts {
        self.depth = depth;
        self
    }

    /// 0 keeps the default page size
    pub fn with_page_size(mut self, page_size: usize) -> ListOpts {
        self.page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
        self
    }

    pub fn with_human(mut self, human: bool) -> ListOpts {
        self.human = human;
        self
    }

    /// The sources to list, "." when none were given
    pub fn sources_or_cwd(&self) -> Vec<PathBuf> {
        if self.sources.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            self.sources.clone()
        }
    }
}
