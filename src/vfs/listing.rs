//! Directory listing: directories first, then everything else.

use std::fs;

use super::node::{DirEntry, EntryType};
use crate::error::NavError;

/// List the entries directly inside `path`.
///
/// Hidden entries are skipped unless `show_hidden` is set. The result holds
/// every directory followed by every non-directory, each group in
/// enumeration order (entries are enumerated sorted by name). Any failure
/// while reading the directory fails the whole listing.
pub fn list(path: &str, show_hidden: bool) -> Result<Vec<DirEntry>, NavError> {
    let mut entries = read_entries(path)?;
    entries.retain(|entry| show_hidden || !entry.is_hidden());

    let (mut dirs, files): (Vec<_>, Vec<_>) = entries.into_iter().partition(DirEntry::is_dir);
    dirs.extend(files);
    Ok(dirs)
}

fn read_entries(path: &str) -> Result<Vec<DirEntry>, NavError> {
    let reader = fs::read_dir(path).map_err(|e| NavError::read(path, e))?;

    let mut entries = Vec::new();
    for entry in reader {
        let entry = entry.map_err(|e| NavError::read(path, e))?;
        // file_type() does not follow symlinks, so a link to a directory lists as a file
        let file_type = entry.file_type().map_err(|e| NavError::read(path, e))?;
        let entry_type = if file_type.is_dir() {
            EntryType::Directory
        } else {
            EntryType::File
        };
        entries.push(DirEntry::new(
            entry.file_name().to_string_lossy().into_owned(),
            entry_type,
        ));
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}
