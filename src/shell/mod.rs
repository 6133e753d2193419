pub mod commands;
pub mod completion;
pub mod repl;

use std::sync::{PoisonError, RwLock};

use crate::error::NavError;
use crate::vfs::{self, DirEntry};
pub use commands::{Command, CommandOutput};
pub use completion::ShellCompleter;
pub use repl::Shell;

/// Default working directory for new navigators
pub const DEFAULT_PATH: &str = "/Users";

/// Navigator - tracks one working directory and runs commands against it
///
/// The working directory sits behind a reader/writer lock: `cd` holds the
/// write side for its whole resolve/stat/replace sequence, every other
/// command reads a snapshot and releases the lock before touching the
/// filesystem.
#[derive(Debug)]
pub struct Navigator {
    /// Absolute path of the working directory
    current_path: RwLock<String>,
}

impl Navigator {
    /// Create a navigator starting at `path`. The path is not checked.
    pub fn new(path: impl Into<String>) -> Self {
        Navigator {
            current_path: RwLock::new(path.into()),
        }
    }

    /// Get the working directory
    pub fn pwd(&self) -> String {
        self.current_path
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Resolve a fragment against the working directory without touching the filesystem
    pub fn resolve(&self, fragment: &str) -> String {
        vfs::resolve(fragment, &self.pwd())
    }

    /// Change the working directory
    pub fn cd(&self, fragment: &str) -> Result<(), NavError> {
        let mut current = self
            .current_path
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        commands::cd::change_dir(&mut current, fragment)
    }

    /// List the working directory
    pub fn ls(&self, show_hidden: bool) -> Result<Vec<DirEntry>, NavError> {
        commands::ls::list_dir(&self.pwd(), show_hidden)
    }

    /// Create a directory (and missing parents)
    pub fn mkdir(&self, fragment: &str) -> Result<(), NavError> {
        commands::mkdir::make_dir(&self.pwd(), fragment)
    }

    /// Create an empty file unless something already exists there
    pub fn touch(&self, fragment: &str) -> Result<(), NavError> {
        commands::touch::touch_file(&self.pwd(), fragment)
    }

    /// Remove a file or directory tree
    pub fn rm(&self, fragment: &str) -> Result<(), NavError> {
        commands::rm::remove(&self.pwd(), fragment)
    }

    /// Run a command
    pub fn execute(&self, command: &Command) -> Result<CommandOutput, NavError> {
        command.execute(self)
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Navigator::new(DEFAULT_PATH)
    }
}
