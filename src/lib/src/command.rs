//! # Drive Commands - entry point for all drive commands
//!
//! Top level commands the CLI dispatches to
//!

pub mod config;
pub mod init;
pub mod list;

pub use crate::command::init::init;
pub use crate::command::list::{list, ListSummary, RootListing, RootOutcome};
