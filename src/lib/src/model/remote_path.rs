use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A "/" rooted path on the remote, independent of the local layout
#[derive(Deserialize, Serialize, Debug, Display, Clone, PartialEq, Eq, Hash)]
pub struct RemotePath(String);

impl RemotePath {
    pub fn root() -> RemotePath {
        RemotePath(String::from("/"))
    }

    /// Builds a path from a relative "a/b" style string, "" is the root
    pub fn from_relative(relative: impl AsRef<str>) -> RemotePath {
        RemotePath(format!("/{}", relative.as_ref()))
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Non empty path segments, in order
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }
}

impl AsRef<str> for RemotePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use crate::model::RemotePath;

    #[test]
    fn test_remote_path_segments() {
        let path = RemotePath::from_relative("docs/2015/report.pdf");
        assert_eq!(path.to_string(), "/docs/2015/report.pdf");
        assert_eq!(
            path.segments().collect::<Vec<_>>(),
            vec!["docs", "2015", "report.pdf"]
        );
        assert!(!path.is_root());
        assert!(RemotePath::from_relative("").is_root());
        assert_eq!(RemotePath::root().segments().count(), 0);
    }
}
