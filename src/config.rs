//! Command-line and environment configuration.

use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;

use crate::session::DEFAULT_TOKEN_LENGTH;
use crate::shell::DEFAULT_PATH;

/// Default listen address for the HTTP server
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

#[derive(Debug, Parser)]
#[command(name = "filesh", version, about = "Session-scoped remote file browsing")]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub mode: Option<Mode>,

    /// Server options when no subcommand is given
    #[command(flatten)]
    pub serve: ServeArgs,
}

#[derive(Debug, Subcommand)]
pub enum Mode {
    /// Serve the HTTP API (default)
    Serve(ServeArgs),
    /// Browse the local filesystem interactively
    Shell(ShellArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "FILESH_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// Working directory for new sessions
    #[arg(long, env = "FILESH_ROOT", default_value = DEFAULT_PATH)]
    pub root: String,

    /// Length of generated session tokens
    #[arg(long, default_value_t = DEFAULT_TOKEN_LENGTH)]
    pub token_length: usize,
}

#[derive(Debug, Clone, Args)]
pub struct ShellArgs {
    /// Starting directory (defaults to the home directory)
    #[arg(long, env = "FILESH_ROOT")]
    pub root: Option<String>,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind: SocketAddr,
    pub root: String,
    pub token_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
            root: DEFAULT_PATH.to_string(),
            token_length: DEFAULT_TOKEN_LENGTH,
        }
    }
}

impl From<ServeArgs> for Config {
    fn from(args: ServeArgs) -> Self {
        Config {
            bind: args.bind,
            root: args.root,
            token_length: args.token_length,
        }
    }
}

impl ShellArgs {
    /// Resolve the starting directory, falling back to home and then `/`
    pub fn start_dir(&self) -> String {
        self.root.clone().unwrap_or_else(|| {
            dirs::home_dir()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_else(|| "/".to_string())
        })
    }
}
