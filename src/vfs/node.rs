/// Kind of entry found inside a directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    Directory,
    /// Anything that is not a directory (regular files, symlinks, sockets, ...)
    File,
}

/// A single entry produced by a directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub entry_type: EntryType,
}

impl DirEntry {
    pub fn new(name: impl Into<String>, entry_type: EntryType) -> Self {
        DirEntry {
            name: name.into(),
            entry_type,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.entry_type == EntryType::Directory
    }

    /// Hidden entries start with a dot
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}
