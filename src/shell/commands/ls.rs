use colored::*;

use crate::error::NavError;
use crate::vfs::{self, DirEntry};

/// List the working directory.
///
/// The directory is not re-checked first; if it vanished since the last
/// `cd`, the read itself reports the failure.
pub fn list_dir(current: &str, show_hidden: bool) -> Result<Vec<DirEntry>, NavError> {
    vfs::list(current, show_hidden)
}

/// Render one entry for terminal output
pub fn display_entry(entry: &DirEntry) -> String {
    if entry.is_dir() {
        format!("{}/", entry.name.blue().bold())
    } else {
        entry.name.clone()
    }
}
