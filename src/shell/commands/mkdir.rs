use std::fs;

use crate::error::NavError;
use crate::vfs;

/// Create the directory named by `fragment`, along with any missing parents.
///
/// An existing directory is success. The root always exists, so it never
/// reaches the filesystem.
pub fn make_dir(current: &str, fragment: &str) -> Result<(), NavError> {
    if fragment.is_empty() {
        return Err(NavError::MissingName);
    }

    let target = vfs::resolve(fragment, current);
    if vfs::is_root(&target) {
        return Ok(());
    }

    fs::create_dir_all(&target).map_err(|e| NavError::create(&target, e))
}
