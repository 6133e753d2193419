use anyhow::{Result, anyhow};

pub mod cd;
pub mod ls;
pub mod mkdir;
pub mod output;
pub mod rm;
pub mod touch;

use crate::error::NavError;
use crate::vfs::DirEntry;

use super::Navigator;

/// Every command a navigator understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Pwd,
    Cd { target: String },
    Ls { show_hidden: bool },
    Mkdir { name: String },
    Touch { name: String },
    Rm { name: String },
}

/// Successful result of a [`Command`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Current working directory (`pwd`)
    Path(String),
    /// Directory listing (`ls`)
    Listing(Vec<DirEntry>),
    /// Command succeeded with nothing to report
    Done,
}

impl Command {
    /// Command names, in the order shown by `help`
    pub const NAMES: [&'static str; 6] = ["pwd", "cd", "ls", "mkdir", "touch", "rm"];

    /// Get the command name
    pub fn name(&self) -> &'static str {
        match self {
            Command::Pwd => "pwd",
            Command::Cd { .. } => "cd",
            Command::Ls { .. } => "ls",
            Command::Mkdir { .. } => "mkdir",
            Command::Touch { .. } => "touch",
            Command::Rm { .. } => "rm",
        }
    }

    /// Get command usage help
    pub fn usage(name: &str) -> Option<&'static str> {
        match name {
            "pwd" => Some("pwd            - Print working directory"),
            "cd" => Some("cd [PATH]      - Change directory"),
            "ls" => Some("ls [-a]        - List contents (-a shows hidden entries)"),
            "mkdir" => Some("mkdir PATH     - Create a directory and any missing parents"),
            "touch" => Some("touch PATH     - Create an empty file if nothing exists there"),
            "rm" => Some("rm PATH        - Remove a file or directory tree"),
            _ => None,
        }
    }

    /// Build a command from a shell word list.
    ///
    /// Missing operands become empty strings; the navigator decides whether
    /// an empty operand is valid.
    pub fn parse(name: &str, args: &[String]) -> Result<Self> {
        let operand = || args.first().cloned().unwrap_or_default();

        match name {
            "pwd" => Ok(Command::Pwd),
            "cd" => Ok(Command::Cd { target: operand() }),
            "ls" => {
                let mut show_hidden = false;
                for arg in args {
                    match arg.as_str() {
                        "-a" | "-A" | "--all" => show_hidden = true,
                        other => return Err(anyhow!("ls: unsupported argument: {other}")),
                    }
                }
                Ok(Command::Ls { show_hidden })
            }
            "mkdir" => Ok(Command::Mkdir { name: operand() }),
            "touch" => Ok(Command::Touch { name: operand() }),
            "rm" => Ok(Command::Rm { name: operand() }),
            _ => Err(anyhow!("Unknown command: {name}")),
        }
    }

    /// Run this command against a navigator
    pub fn execute(&self, navigator: &Navigator) -> Result<CommandOutput, NavError> {
        match self {
            Command::Pwd => Ok(CommandOutput::Path(navigator.pwd())),
            Command::Cd { target } => navigator.cd(target).map(|_| CommandOutput::Done),
            Command::Ls { show_hidden } => navigator.ls(*show_hidden).map(CommandOutput::Listing),
            Command::Mkdir { name } => navigator.mkdir(name).map(|_| CommandOutput::Done),
            Command::Touch { name } => navigator.touch(name).map(|_| CommandOutput::Done),
            Command::Rm { name } => navigator.rm(name).map(|_| CommandOutput::Done),
        }
    }
}
