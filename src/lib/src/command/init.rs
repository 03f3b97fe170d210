//! # drive init
//!
//! Mark a local directory as the root of a drive context
//!

use std::path::Path;

use crate::config::DriveConfig;
use crate::error::DriveError;
use crate::model::LocalContext;
use crate::util;

/// # Initialize a drive context
///
/// Creates `<path>/.drive/config.toml` pointing at `config.remote_url`. The
/// directory maps to "/" on the remote from then on.
pub fn init(path: &Path, config: DriveConfig) -> Result<LocalContext, DriveError> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }

    let hidden_dir = util::fs::drive_hidden_dir(path);
    let existed = hidden_dir.exists();
    match LocalContext::init(path, config) {
        Ok(context) => {
            log::debug!("initialized drive context at {:?}", context.path);
            Ok(context)
        }
        Err(err) => {
            // Do not leave a half written context behind
            if !existed && hidden_dir.exists() {
                std::fs::remove_dir_all(&hidden_dir)?;
            }
            Err(err)
        }
    }
}
