//! Message only payload for the `DriveError` variants that wrap no library error
//!

use derive_more::{Debug, Display};

#[derive(Debug, Display, Clone, PartialEq, Eq)]
#[debug("{_0}")]
#[display("{_0}")]
pub struct StringError(String);

impl StringError {
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StringError {
    fn from(s: &str) -> Self {
        StringError(s.to_string())
    }
}

impl From<String> for StringError {
    fn from(s: String) -> Self {
        StringError(s)
    }
}

impl std::error::Error for StringError {}
