//! Various utility functions
//!

pub mod bytes;
pub mod fs;
pub mod logging;

pub use crate::util::bytes::ByteFormatter;
