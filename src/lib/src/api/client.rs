//! # API Client - For interacting with the remote drive over HTTP
//!

use crate::constants;
use crate::error::DriveError;
use crate::model::RemoteDrive;
use crate::view::ErrorResponse;
pub use reqwest::Url;
use reqwest::{header, Client, ClientBuilder, StatusCode};
use std::time;

pub mod files;

const VERSION: &str = constants::DRIVE_VERSION;
const USER_AGENT: &str = "drive";

// TODO: share one client across requests so keep-alive connections get reused
pub fn new_for_remote(remote: &RemoteDrive) -> Result<Client, DriveError> {
    match builder_for_remote(remote)?
        .timeout(time::Duration::from_secs(constants::DEFAULT_TIMEOUT_SECS))
        .build()
    {
        Ok(client) => Ok(client),
        Err(reqwest_err) => Err(DriveError::HTTP(reqwest_err)),
    }
}

fn builder_for_remote(remote: &RemoteDrive) -> Result<ClientBuilder, DriveError> {
    let builder = Client::builder().user_agent(format!("{USER_AGENT}/{VERSION}"));

    let Some(auth_token) = &remote.auth_token else {
        log::trace!("No auth token set for remote: {}", remote.url());
        return Ok(builder);
    };

    log::debug!("Setting auth token for remote: {}", remote.url());
    let auth_header = format!("Bearer {auth_token}");
    let mut auth_value = match header::HeaderValue::from_str(auth_header.as_str()) {
        Ok(header) => header,
        Err(err) => {
            log::debug!("api::client::builder_for_remote invalid header value: {}", err);
            return Err(DriveError::basic_str(
                "Error setting request auth. Please check the auth token in .drive/config.toml",
            ));
        }
    };
    auth_value.set_sensitive(true);
    let mut headers = header::HeaderMap::new();
    headers.insert(header::AUTHORIZATION, auth_value);
    Ok(builder.default_headers(headers))
}

/// Returns the body of a 2xx response, otherwise turns the remote's error body into a `DriveError`
pub async fn parse_json_body(url: &Url, res: reqwest::Response) -> Result<String, DriveError> {
    let status = res.status();
    let body = res.text().await?;

    log::debug!("url: {url}\nstatus: {status}\nbody: {body}");

    if status.is_success() {
        return Ok(body);
    }

    let message = match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(response) => response.error.message,
        Err(err) => {
            log::debug!("Could not deserialize error body: {}", err);
            body
        }
    };

    if status == StatusCode::NOT_FOUND {
        return Err(DriveError::resource_not_found(format!(
            "{message} [{url}]"
        )));
    }

    Err(DriveError::basic_str(format!(
        "Err status [{status}] from url {url} [{message}]"
    )))
}
