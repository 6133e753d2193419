//! Session registry: opaque tokens bound to private navigators.

use rand::Rng;
use rand::distributions::Alphanumeric;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::NavError;
use crate::shell::{DEFAULT_PATH, Navigator};

/// Length of generated session tokens
pub const DEFAULT_TOKEN_LENGTH: usize = 16;

/// Registry mapping session tokens to navigators
///
/// Cloning is cheap and every clone shares the same sessions. Sessions live
/// until the process exits.
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<String, Arc<Navigator>>>>,
    /// Working directory given to every new navigator
    default_path: Arc<str>,
    token_length: usize,
}

impl SessionRegistry {
    /// Create a registry whose sessions start in `default_path`
    pub fn new(default_path: impl Into<String>, token_length: usize) -> Self {
        let default_path: String = default_path.into();
        SessionRegistry {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            default_path: Arc::from(default_path),
            token_length: token_length.max(1),
        }
    }

    /// Create a session and return its token
    pub fn create_session(&self) -> String {
        let token = generate_token(self.token_length);
        let navigator = Arc::new(Navigator::new(self.default_path.to_string()));

        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.clone(), navigator);

        tracing::info!(
            token_prefix = &token[..token.len().min(4)],
            "created session"
        );
        token
    }

    /// Look up the navigator bound to `token`
    pub fn lookup(&self, token: &str) -> Result<Arc<Navigator>, NavError> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .cloned()
            .ok_or(NavError::SessionNotFound)
    }

    /// Working directory new sessions start in
    pub fn default_path(&self) -> &str {
        &self.default_path
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if there are no sessions
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        SessionRegistry::new(DEFAULT_PATH, DEFAULT_TOKEN_LENGTH)
    }
}

impl Clone for SessionRegistry {
    fn clone(&self) -> Self {
        SessionRegistry {
            sessions: Arc::clone(&self.sessions),
            default_path: Arc::clone(&self.default_path),
            token_length: self.token_length,
        }
    }
}

/// Random token over `[0-9a-zA-Z]`. Not suitable as a secret.
fn generate_token(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
