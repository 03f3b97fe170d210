//! libdrive
//!
//! Browse remote cloud storage from the command line.
//!
//! # Examples
//!
//! Listing a remote folder two levels deep:
//!
//! ```
//! use libdrive::command;
//! use libdrive::core::{LinePrompt, PathResolver};
//! use libdrive::model::LocalContext;
//! use libdrive::opts::ListOpts;
//!
//! # async fn run() -> Result<(), libdrive::error::DriveError> {
//! let context = LocalContext::from_current_dir()?;
//! let remote = context.remote()?;
//! let resolver = PathResolver::new(&context.path);
//! let opts = ListOpts::from_sources(vec!["docs".into()]).with_depth(2);
//! let mut prompt = LinePrompt::stdin();
//! let mut out = std::io::stdout();
//! let summary = command::list(&resolver, &remote, &opts, &mut prompt, &mut out).await?;
//! assert!(summary.is_complete());
//! # Ok(())
//! # }
//! ```
//!

pub mod api;
pub mod command;
pub mod config;
pub mod constants;
pub mod core;
pub mod error;
pub mod model;
pub mod opts;
pub mod util;
pub mod view;
