//! Wire formats of the remote's JSON responses
//!

pub mod error_response;
pub mod file_resource;

pub use crate::view::error_response::{ErrorDetail, ErrorResponse};
pub use crate::view::file_resource::{FileList, FileResource, UserPermission};
