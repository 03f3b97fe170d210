//! Domain types shared by the api, the walker and the commands
//!

pub mod entry;
pub mod list_request;
pub mod local_context;
pub mod remote_drive;
pub mod remote_path;

pub use crate::model::entry::Entry;
pub use crate::model::list_request::{EntryPage, ListRequest};
pub use crate::model::local_context::LocalContext;
pub use crate::model::remote_drive::RemoteDrive;
pub use crate::model::remote_path::RemotePath;
