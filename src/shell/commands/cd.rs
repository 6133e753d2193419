use std::fs;

use crate::error::NavError;
use crate::vfs;

/// Change `current` to the directory named by `fragment`.
///
/// `current` is only replaced once the target is known to be an existing
/// directory; on any failure it is left untouched.
pub fn change_dir(current: &mut String, fragment: &str) -> Result<(), NavError> {
    let target = vfs::resolve(fragment, current);

    let metadata = fs::metadata(&target).map_err(|e| NavError::stat(&target, e))?;
    if !metadata.is_dir() {
        return Err(NavError::NotADirectory { path: target });
    }

    *current = target;
    Ok(())
}
