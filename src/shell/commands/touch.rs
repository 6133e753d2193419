use std::fs::{self, OpenOptions};
use std::io;

use crate::error::NavError;
use crate::vfs;

/// Make sure something exists at `fragment`, creating an empty file if not.
///
/// Existing entries of any kind are left exactly as they are. A stat failure
/// other than "not found" (an ancestor that is a regular file, say) means
/// the file cannot be created, and is reported as a create failure.
pub fn touch_file(current: &str, fragment: &str) -> Result<(), NavError> {
    if fragment.is_empty() {
        return Err(NavError::MissingName);
    }

    let target = vfs::resolve(fragment, current);
    match fs::symlink_metadata(&target) {
        Ok(_) => return Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(NavError::create(&target, e)),
    }

    match OpenOptions::new().write(true).create_new(true).open(&target) {
        Ok(_) => Ok(()),
        // Lost a race with another creator; existence is all we promise
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(NavError::create(&target, e)),
    }
}
