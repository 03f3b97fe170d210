//! Errors for the drive library
//!
//! Enumeration for all errors that can occur while resolving and listing remote paths
//!

use derive_more::{Display, Error};
use std::io;
use std::num::ParseIntError;
use std::path::Path;

pub mod path_buf_error;
pub mod string_error;

pub use crate::error::path_buf_error::PathBufError;
pub use crate::error::string_error::StringError;

pub const CONTEXT_NOT_FOUND: &str =
    "No drive context exists, looking for directory: .drive\n\nCreate one with:\n\n  drive init --remote <URL>\n";

pub const REMOTE_PATH_NOT_FOUND: &str = "remote path doesn't exist";

#[derive(Debug, Display, Error)]
pub enum DriveError {
    // Local context
    ContextNotFound(Box<PathBufError>),
    ContextAlreadyExists(Box<PathBufError>),

    // Paths
    PathResolution(StringError),
    RemotePathNotFound(StringError),
    ResourceNotFound(StringError),

    // Listing
    ListAborted(StringError),

    // External Library Errors
    IO(io::Error),
    TomlSer(toml::ser::Error),
    TomlDe(toml::de::Error),
    URL(url::ParseError),
    JSON(serde_json::Error),
    HTTP(reqwest::Error),

    // Fallback
    Basic(StringError),
}

impl DriveError {
    pub fn basic_str(s: impl AsRef<str>) -> Self {
        DriveError::Basic(StringError::from(s.as_ref()))
    }

    pub fn context_not_found(path: impl AsRef<Path>) -> Self {
        log::debug!("no .drive directory found above {:?}", path.as_ref());
        DriveError::ContextNotFound(Box::new(PathBufError::with_message(
            path,
            CONTEXT_NOT_FOUND,
        )))
    }

    pub fn context_already_exists(path: impl AsRef<Path>) -> Self {
        DriveError::ContextAlreadyExists(Box::new(PathBufError::with_message(
            path,
            "drive context already exists",
        )))
    }

    pub fn path_resolution(
        source: impl AsRef<Path>,
        root: impl AsRef<Path>,
        reason: impl AsRef<str>,
    ) -> Self {
        let err = format!(
            "Could not resolve {:?} against {:?}: {}",
            source.as_ref(),
            root.as_ref(),
            reason.as_ref()
        );
        DriveError::PathResolution(StringError::from(err))
    }

    pub fn remote_path_not_found() -> Self {
        DriveError::RemotePathNotFound(StringError::from(REMOTE_PATH_NOT_FOUND))
    }

    pub fn resource_not_found(value: impl AsRef<str>) -> Self {
        DriveError::ResourceNotFound(StringError::from(value.as_ref()))
    }

    pub fn list_aborted(path: impl AsRef<str>) -> Self {
        let err = format!("Listing aborted, could not look up '{}'", path.as_ref());
        DriveError::ListAborted(StringError::from(err))
    }

    pub fn remote_not_set() -> Self {
        DriveError::basic_str(
            "Remote not set, you can set a remote by running:\n\n  drive config --remote <url>\n",
        )
    }

    pub fn invalid_remote_url(url: impl AsRef<str>) -> Self {
        let err = format!(
            "\nRemote invalid, must be fully qualified URL, got: {:?}\n\n  drive config --remote https://drive.example.com/api/v2\n",
            url.as_ref()
        );
        DriveError::basic_str(err)
    }

    pub fn parse_error(value: impl AsRef<str>) -> Self {
        let err = format!("Parse error: {:?}", value.as_ref());
        DriveError::basic_str(err)
    }
}

impl From<io::Error> for DriveError {
    fn from(error: io::Error) -> Self {
        DriveError::IO(error)
    }
}

impl From<String> for DriveError {
    fn from(error: String) -> Self {
        DriveError::Basic(StringError::from(error))
    }
}

impl From<toml::ser::Error> for DriveError {
    fn from(error: toml::ser::Error) -> Self {
        DriveError::TomlSer(error)
    }
}

impl From<toml::de::Error> for DriveError {
    fn from(error: toml::de::Error) -> Self {
        DriveError::TomlDe(error)
    }
}

impl From<url::ParseError> for DriveError {
    fn from(error: url::ParseError) -> Self {
        DriveError::URL(error)
    }
}

impl From<serde_json::Error> for DriveError {
    fn from(error: serde_json::Error) -> Self {
        DriveError::JSON(error)
    }
}

impl From<reqwest::Error> for DriveError {
    fn from(error: reqwest::Error) -> Self {
        DriveError::HTTP(error)
    }
}

impl From<ParseIntError> for DriveError {
    fn from(error: ParseIntError) -> Self {
        DriveError::basic_str(error.to_string())
    }
}
