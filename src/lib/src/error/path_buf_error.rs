//! # PathBufError
//!
//! Wraps a path and a message so path related failures can be boxed into `DriveError`.
//!

use std::fmt;
use std::path::{Path, PathBuf};

pub struct PathBufError {
    pub path: PathBuf,
    message: String,
}

impl PathBufError {
    pub fn with_message(path: impl AsRef<Path>, message: impl AsRef<str>) -> Self {
        PathBufError {
            path: path.as_ref().to_path_buf(),
            message: message.as_ref().to_string(),
        }
    }
}

impl From<&Path> for PathBufError {
    fn from(path: &Path) -> Self {
        PathBufError::with_message(path, "Path does not exist")
    }
}

impl fmt::Display for PathBufError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {:?}", self.message, self.path)
    }
}

impl fmt::Debug for PathBufError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {:?}", self.message, self.path)
    }
}

impl std::error::Error for PathBufError {}
