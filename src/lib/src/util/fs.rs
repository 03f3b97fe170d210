//! Wrapper around std::fs commands to make them easier to use
//! and eventually abstract away the fs implementation
//!

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::constants;
use crate::error::DriveError;

pub fn drive_hidden_dir(path: impl AsRef<Path>) -> PathBuf {
    path.as_ref().join(Path::new(constants::DRIVE_HIDDEN_DIR))
}

pub fn config_filepath(path: impl AsRef<Path>) -> PathBuf {
    drive_hidden_dir(path).join(constants::CONFIG_FILENAME)
}

pub fn read_from_path(path: impl AsRef<Path>) -> Result<String, DriveError> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents),
        Err(err) => {
            let err = format!("Could not open file {}\n{err}", path.display());
            Err(DriveError::basic_str(err))
        }
    }
}

pub fn write_to_path(path: impl AsRef<Path>, data: impl AsRef<str>) -> Result<(), DriveError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, data.as_ref())?;
    Ok(())
}

/// Walks up from `path` until it finds a directory holding `.drive`
pub fn get_context_root(path: impl AsRef<Path>) -> Option<PathBuf> {
    let mut current = Some(path.as_ref());
    while let Some(dir) = current {
        if drive_hidden_dir(dir).is_dir() {
            return Some(dir.to_path_buf());
        }
        current = dir.parent();
    }
    None
}

/// Joins `path` onto `base` unless it is already absolute
pub fn abs_path_of(base: impl AsRef<Path>, path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(base.as_ref().join(path))
    }
}

/// Lexically cleans up a path, does not touch the filesystem.
///
/// `.` components are dropped and `..` pops the previous normal component.
/// A `..` that would climb above a root or prefix is dropped, one that would
/// climb above the start of a relative path is kept.
pub fn normalize(path: impl AsRef<Path>) -> PathBuf {
    let mut result: Vec<Component> = vec![];
    for component in path.as_ref().components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match result.last() {
                Some(Component::Normal(_)) => {
                    result.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => result.push(component),
            },
            _ => result.push(component),
        }
    }
    result.iter().collect()
}

/// Joins the normal components of a relative path with "/", regardless of platform
pub fn to_unix_str(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().to_string()),
            _ => None,
        })
        .collect::<Vec<String>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use crate::error::DriveError;
    use crate::test;
    use crate::util;

    use std::path::{Path, PathBuf};

    #[test]
    fn test_normalize_drops_cur_dir_and_pops_parent() {
        assert_eq!(
            util::fs::normalize("/a/./b/../c"),
            PathBuf::from("/a/c")
        );
        assert_eq!(util::fs::normalize("/.."), PathBuf::from("/"));
        assert_eq!(util::fs::normalize("../x"), PathBuf::from("../x"));
    }

    #[test]
    fn test_abs_path_of_keeps_absolute_paths() {
        assert_eq!(
            util::fs::abs_path_of("/root/ctx", "/other/file.txt"),
            PathBuf::from("/other/file.txt")
        );
        assert_eq!(
            util::fs::abs_path_of("/root/ctx", "docs/../img"),
            PathBuf::from("/root/ctx/img")
        );
    }

    #[test]
    fn test_to_unix_str_joins_with_slash() {
        let path: PathBuf = ["c", "d", "e.txt"].iter().collect();
        assert_eq!(util::fs::to_unix_str(path), "c/d/e.txt");
        assert_eq!(util::fs::to_unix_str(Path::new("")), "");
    }

    #[test]
    fn test_get_context_root_from_nested_dir() -> Result<(), DriveError> {
        test::run_empty_dir_test(|dir| {
            std::fs::create_dir_all(util::fs::drive_hidden_dir(dir))?;
            let nested = dir.join("a").join("b");
            std::fs::create_dir_all(&nested)?;

            let root = util::fs::get_context_root(&nested);
            assert_eq!(root, Some(dir.to_path_buf()));
            Ok(())
        })
    }

    #[test]
    fn test_get_context_root_none_without_hidden_dir() -> Result<(), DriveError> {
        test::run_empty_dir_test(|dir| {
            let nested = dir.join("plain");
            std::fs::create_dir_all(&nested)?;
            // The temp dir may live under a context on a dev box, only check the nested dir itself
            let root = util::fs::get_context_root(&nested);
            assert_ne!(root, Some(nested));
            Ok(())
        })
    }
}
