//! # drive config
//!
//! Update the config of the current drive context
//!

use crate::error::DriveError;
use crate::model::{LocalContext, RemoteDrive};

/// # Set the remote for a context
/// Validated before it is saved
pub fn set_remote(context: &mut LocalContext, url: &str) -> Result<RemoteDrive, DriveError> {
    let remote = RemoteDrive::from_url(url)?;
    context.config.remote_url = Some(remote.url().to_string());
    context.save()?;
    context.remote()
}

/// # Set or clear the bearer token sent with every request
pub fn set_auth_token(context: &mut LocalContext, token: Option<&str>) -> Result<(), DriveError> {
    context.config.auth_token = token.filter(|t| !t.is_empty()).map(String::from);
    context.save()
}

/// # Set the default page size for `drive ls`, 0 goes back to the built in default
pub fn set_page_size(context: &mut LocalContext, page_size: usize) -> Result<usize, DriveError> {
    context.config.page_size = (page_size > 0).then_some(page_size);
    context.save()?;
    Ok(context.config.page_size())
}
