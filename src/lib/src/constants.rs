//! Constants used throughout the drive codebase
//!

/// Current version of drive
pub const DRIVE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hidden directory that marks the root of a local drive context
pub const DRIVE_HIDDEN_DIR: &str = ".drive";
/// Config file within the hidden dir
pub const CONFIG_FILENAME: &str = "config.toml";

/// Default number of children requested per page
pub const DEFAULT_PAGE_SIZE: usize = 30;
/// Default traversal depth, negative means unlimited
pub const DEFAULT_DEPTH: i32 = -1;
/// Shown between pages of a listing
pub const NEXT_PAGE_PROMPT: &str = "---Next---";

/// Id the remote uses for the top level folder
pub const ROOT_FOLDER_ID: &str = "root";
/// Mime type the remote assigns to folders
pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// Timeout for a single request to the remote
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
