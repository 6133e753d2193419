//! Error taxonomy for navigator commands and session lookup.
//!
//! Filesystem failures keep the operating system's diagnostic text in a
//! `detail` field so callers can forward it without re-parsing.

use std::io;

use thiserror::Error;

/// Broad classification of a [`NavError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Required input was missing or empty
    Validation,
    /// The resolved path does not exist
    NotFound,
    /// The path exists but is the wrong kind of entry
    TypeMismatch,
    /// The operation is refused outright
    Forbidden,
    /// An I/O failure reported by the filesystem
    Filesystem,
    /// The session token is unknown
    SessionNotFound,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NavError {
    #[error("missing name")]
    MissingName,

    #[error("stat {path}: {detail}")]
    NotFound { path: String, detail: String },

    #[error("stat {path}: {detail}")]
    StatError { path: String, detail: String },

    #[error("Not directory")]
    NotADirectory { path: String },

    #[error("refusing to remove the root directory")]
    ForbiddenRoot,

    #[error("read {path}: {detail}")]
    ReadError { path: String, detail: String },

    #[error("create {path}: {detail}")]
    CreateError { path: String, detail: String },

    #[error("remove {path}: {detail}")]
    RemoveError { path: String, detail: String },

    #[error("session not found")]
    SessionNotFound,
}

impl NavError {
    /// Classify a failed stat call
    pub fn stat(path: &str, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            NavError::NotFound {
                path: path.to_string(),
                detail: err.to_string(),
            }
        } else {
            NavError::StatError {
                path: path.to_string(),
                detail: err.to_string(),
            }
        }
    }

    pub fn read(path: &str, err: io::Error) -> Self {
        NavError::ReadError {
            path: path.to_string(),
            detail: err.to_string(),
        }
    }

    pub fn create(path: &str, err: io::Error) -> Self {
        NavError::CreateError {
            path: path.to_string(),
            detail: err.to_string(),
        }
    }

    pub fn remove(path: &str, err: io::Error) -> Self {
        NavError::RemoveError {
            path: path.to_string(),
            detail: err.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            NavError::MissingName => ErrorKind::Validation,
            NavError::NotFound { .. } => ErrorKind::NotFound,
            NavError::NotADirectory { .. } => ErrorKind::TypeMismatch,
            NavError::ForbiddenRoot => ErrorKind::Forbidden,
            NavError::StatError { .. }
            | NavError::ReadError { .. }
            | NavError::CreateError { .. }
            | NavError::RemoveError { .. } => ErrorKind::Filesystem,
            NavError::SessionNotFound => ErrorKind::SessionNotFound,
        }
    }

    /// The pass-through diagnostic text from the filesystem, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            NavError::NotFound { detail, .. }
            | NavError::StatError { detail, .. }
            | NavError::ReadError { detail, .. }
            | NavError::CreateError { detail, .. }
            | NavError::RemoveError { detail, .. } => Some(detail),
            _ => None,
        }
    }
}
