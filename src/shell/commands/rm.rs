use std::fs;
use std::io;

use crate::error::NavError;
use crate::vfs;

/// Remove whatever `fragment` names, recursing into directories.
///
/// Removing something that is already gone succeeds. The root is refused
/// before anything is touched.
pub fn remove(current: &str, fragment: &str) -> Result<(), NavError> {
    if fragment.is_empty() {
        return Err(NavError::MissingName);
    }

    let target = vfs::resolve(fragment, current);
    if vfs::is_root(&target) {
        return Err(NavError::ForbiddenRoot);
    }

    // symlink_metadata so a link is removed rather than followed
    let metadata = match fs::symlink_metadata(&target) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(NavError::remove(&target, e)),
    };

    let result = if metadata.is_dir() {
        fs::remove_dir_all(&target)
    } else {
        fs::remove_file(&target)
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(NavError::remove(&target, e)),
    }
}
