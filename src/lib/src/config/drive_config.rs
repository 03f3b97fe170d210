use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants::DEFAULT_PAGE_SIZE;
use crate::error::DriveError;
use crate::util;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DriveConfig {
    pub remote_url: Option<String>,
    // sent as a bearer token, never logged
    pub auth_token: Option<String>,
    pub page_size: Option<usize>,
}

impl DriveConfig {
    pub fn new() -> Self {
        DriveConfig::default()
    }

    pub fn with_remote(url: impl AsRef<str>) -> Self {
        DriveConfig {
            remote_url: Some(url.as_ref().to_string()),
            ..DriveConfig::default()
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DriveError> {
        let contents = util::fs::read_from_path(&path)?;
        let config: DriveConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DriveError> {
        log::debug!("Saving config to {:?}", path.as_ref());
        let toml = toml::to_string(&self)?;
        util::fs::write_to_path(&path, toml)?;
        Ok(())
    }

    pub fn page_size(&self) -> usize {
        match self.page_size {
            Some(size) if size > 0 => size,
            _ => DEFAULT_PAGE_SIZE,
        }
    }
}
