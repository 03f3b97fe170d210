use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::DriveConfig;
use crate::error::DriveError;

/// Where the remote lives and how to talk to it
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RemoteDrive {
    pub url: String,
    pub auth_token: Option<String>,
}

impl RemoteDrive {
    pub fn from_url(url: impl AsRef<str>) -> Result<RemoteDrive, DriveError> {
        let url = url.as_ref();
        match Url::parse(url) {
            Ok(parsed) if parsed.has_host() => Ok(RemoteDrive {
                url: url.trim_end_matches('/').to_string(),
                auth_token: None,
            }),
            _ => Err(DriveError::invalid_remote_url(url)),
        }
    }

    pub fn from_config(config: &DriveConfig) -> Result<RemoteDrive, DriveError> {
        let remote_url = config
            .remote_url
            .as_ref()
            .ok_or_else(DriveError::remote_not_set)?;
        let mut remote = RemoteDrive::from_url(remote_url)?;
        remote.auth_token = config.auth_token.clone();
        Ok(remote)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use crate::config::DriveConfig;
    use crate::error::DriveError;
    use crate::model::RemoteDrive;

    #[test]
    fn test_from_url_trims_trailing_slash() -> Result<(), DriveError> {
        let remote = RemoteDrive::from_url("https://drive.example.com/api/v2/")?;
        assert_eq!(remote.url(), "https://drive.example.com/api/v2");
        Ok(())
    }

    #[test]
    fn test_from_url_rejects_relative() {
        assert!(RemoteDrive::from_url("drive.example.com").is_err());
        assert!(RemoteDrive::from_url("").is_err());
    }

    #[test]
    fn test_from_config_requires_remote() {
        let config = DriveConfig::new();
        let result = RemoteDrive::from_config(&config);
        assert!(result.is_err());
    }
}
