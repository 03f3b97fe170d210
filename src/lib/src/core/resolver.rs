use std::path::{Component, Path, PathBuf};

use crate::error::DriveError;
use crate::model::RemotePath;
use crate::util;

/// Maps local style paths onto canonical remote paths.
///
/// The context root maps to "/" on the remote. Relative sources are taken
/// from `cwd`, which defaults to the root itself.
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
    cwd: PathBuf,
}

impl PathResolver {
    pub fn new(root: impl AsRef<Path>) -> PathResolver {
        let root = util::fs::normalize(root);
        PathResolver {
            cwd: root.clone(),
            root,
        }
    }

    pub fn with_cwd(mut self, cwd: impl AsRef<Path>) -> PathResolver {
        self.cwd = util::fs::abs_path_of(&self.root, cwd);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resolve(&self, source: impl AsRef<Path>) -> Result<RemotePath, DriveError> {
        let source = source.as_ref();
        let abs_path = util::fs::abs_path_of(&self.cwd, source);

        let Some(relative) = pathdiff::diff_paths(&abs_path, &self.root) else {
            return Err(DriveError::path_resolution(
                source,
                &self.root,
                "no relative path to the context root",
            ));
        };

        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(DriveError::path_resolution(
                source,
                &self.root,
                "path is outside the context root",
            ));
        }

        // "." and "" both become the remote root
        let remote = RemotePath::from_relative(util::fs::to_unix_str(&relative));
        log::debug!("resolved {:?} => {}", source, remote);
        Ok(remote)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::PathResolver;
    use crate::error::DriveError;

    #[test]
    fn test_resolve_root_is_slash() -> Result<(), DriveError> {
        let resolver = PathResolver::new("/a/b");
        assert_eq!(resolver.resolve("/a/b")?.as_str(), "/");
        assert_eq!(resolver.resolve("/a/b/.")?.as_str(), "/");
        assert_eq!(resolver.resolve(".")?.as_str(), "/");
        Ok(())
    }

    #[test]
    fn test_resolve_nested_path() -> Result<(), DriveError> {
        let resolver = PathResolver::new("/a");
        assert_eq!(resolver.resolve("/a/c/d")?.as_str(), "/c/d");
        Ok(())
    }

    #[test]
    fn test_resolve_relative_to_cwd() -> Result<(), DriveError> {
        let resolver = PathResolver::new("/ctx").with_cwd("/ctx/docs");
        assert_eq!(resolver.resolve("2015/report.pdf")?.as_str(), "/docs/2015/report.pdf");
        assert_eq!(resolver.resolve("..")?.as_str(), "/");
        assert_eq!(resolver.resolve("../img")?.as_str(), "/img");
        Ok(())
    }

    #[test]
    fn test_resolve_outside_root_fails() {
        let resolver = PathResolver::new("/ctx");
        let result = resolver.resolve("/elsewhere/file.txt");
        assert!(matches!(result, Err(DriveError::PathResolution(_))));

        let result = resolver.resolve("../sibling");
        assert!(matches!(result, Err(DriveError::PathResolution(_))));
    }
}
