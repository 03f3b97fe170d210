use std::path::{Path, PathBuf};

use crate::config::DriveConfig;
use crate::error::DriveError;
use crate::model::RemoteDrive;
use crate::util;

/// A local directory tree mapped onto the remote, `path` is the directory holding `.drive`
#[derive(Debug, Clone)]
pub struct LocalContext {
    pub path: PathBuf,
    pub config: DriveConfig,
}

impl LocalContext {
    pub fn from_current_dir() -> Result<LocalContext, DriveError> {
        let cwd = std::env::current_dir()?;
        LocalContext::from_dir(&cwd)
    }

    /// Finds the context containing `dir`, searching upwards
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<LocalContext, DriveError> {
        let dir = dir.as_ref();
        let Some(root) = util::fs::get_context_root(dir) else {
            return Err(DriveError::context_not_found(dir));
        };
        let root = dunce::canonicalize(&root)?;
        let config = DriveConfig::from_file(util::fs::config_filepath(&root))?;
        log::debug!("LocalContext::from_dir {:?} found root {:?}", dir, root);
        Ok(LocalContext { path: root, config })
    }

    /// Creates `.drive/config.toml` in `dir`
    pub fn init(dir: impl AsRef<Path>, config: DriveConfig) -> Result<LocalContext, DriveError> {
        let dir = dir.as_ref();
        if util::fs::drive_hidden_dir(dir).exists() {
            return Err(DriveError::context_already_exists(dir));
        }
        // Validate before anything touches disk
        RemoteDrive::from_config(&config)?;

        std::fs::create_dir_all(util::fs::drive_hidden_dir(dir))?;
        let root = dunce::canonicalize(dir)?;
        config.save(util::fs::config_filepath(&root))?;
        Ok(LocalContext { path: root, config })
    }

    pub fn save(&self) -> Result<(), DriveError> {
        self.config.save(util::fs::config_filepath(&self.path))
    }

    pub fn remote(&self) -> Result<RemoteDrive, DriveError> {
        RemoteDrive::from_config(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::DriveConfig;
    use crate::error::DriveError;
    use crate::model::LocalContext;
    use crate::test;

    #[test]
    fn test_init_then_load_from_nested_dir() -> Result<(), DriveError> {
        test::run_empty_dir_test(|dir| {
            let config = DriveConfig::with_remote("https://drive.example.com/api/v2");
            let created = LocalContext::init(dir, config)?;

            let nested = dir.join("docs").join("2015");
            std::fs::create_dir_all(&nested)?;
            let loaded = LocalContext::from_dir(&nested)?;

            assert_eq!(loaded.path, created.path);
            assert_eq!(
                loaded.remote()?.url(),
                "https://drive.example.com/api/v2"
            );
            Ok(())
        })
    }

    #[test]
    fn test_init_twice_fails() -> Result<(), DriveError> {
        test::run_empty_dir_test(|dir| {
            let config = DriveConfig::with_remote("https://drive.example.com");
            LocalContext::init(dir, config.clone())?;
            let result = LocalContext::init(dir, config);
            assert!(matches!(result, Err(DriveError::ContextAlreadyExists(_))));
            Ok(())
        })
    }

    #[test]
    fn test_init_rejects_bad_remote() -> Result<(), DriveError> {
        test::run_empty_dir_test(|dir| {
            let config = DriveConfig::with_remote("not a url");
            assert!(LocalContext::init(dir, config).is_err());
            assert!(!dir.join(".drive").exists());
            Ok(())
        })
    }
}
