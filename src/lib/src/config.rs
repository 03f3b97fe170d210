//! Configuration for drive, stored per context in `.drive/config.toml`
//!

pub mod drive_config;

pub use crate::config::drive_config::DriveConfig;
