//! Session-scoped file browsing.
//!
//! Each session owns a [`shell::Navigator`] holding a working directory;
//! clients drive it with `pwd`, `cd`, `ls`, `mkdir`, `touch` and `rm`, either
//! over HTTP ([`server`]) or from the local interactive shell
//! ([`shell::repl`]).

pub mod config;
pub mod error;
pub mod server;
pub mod session;
pub mod shell;
pub mod vfs;

pub use error::{ErrorKind, NavError};
pub use session::SessionRegistry;
pub use shell::{Command, CommandOutput, Navigator};
