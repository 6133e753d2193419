//! Route handlers. Each builds a [`Command`] and hands it to the session's navigator.

use std::sync::Arc;

use axum::async_trait;
use axum::extract::{FromRequestParts, Query, State};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;

use super::error::ApiError;
use crate::error::NavError;
use crate::session::SessionRegistry;
use crate::shell::{Command, CommandOutput, Navigator};

/// Header carrying the session token
pub const TOKEN_HEADER: &str = "x-session-token";

/// Navigator for the session named by the request's token
pub struct Session(pub Arc<Navigator>);

#[derive(Debug, Deserialize)]
struct TokenQuery {
    token: Option<String>,
}

/// Token from the header, falling back to the `token` query parameter
fn token_from_parts(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(String::from)
        .or_else(|| {
            Query::<TokenQuery>::try_from_uri(&parts.uri)
                .ok()
                .and_then(|Query(query)| query.token)
        })
}

#[async_trait]
impl FromRequestParts<SessionRegistry> for Session {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &SessionRegistry,
    ) -> Result<Self, Self::Rejection> {
        let token = token_from_parts(parts).ok_or(NavError::SessionNotFound)?;
        Ok(Session(registry.lookup(&token)?))
    }
}

#[derive(Debug, Deserialize)]
pub struct CdQuery {
    #[serde(default)]
    pub dir: String,
}

/// `hidden` is a switch only when it is literally `true`; any other value is off
#[derive(Debug, Deserialize)]
pub struct LsQuery {
    pub hidden: Option<String>,
}

impl LsQuery {
    pub fn show_hidden(&self) -> bool {
        self.hidden.as_deref() == Some("true")
    }
}

#[derive(Debug, Deserialize)]
pub struct NameQuery {
    #[serde(default)]
    pub name: String,
}

impl IntoResponse for CommandOutput {
    fn into_response(self) -> Response {
        match self {
            CommandOutput::Path(path) => path.into_response(),
            CommandOutput::Listing(entries) => {
                let names: Vec<String> = entries.into_iter().map(|entry| entry.name).collect();
                Json(names).into_response()
            }
            CommandOutput::Done => StatusCode::OK.into_response(),
        }
    }
}

/// Run a command on the blocking pool
async fn dispatch(navigator: Arc<Navigator>, command: Command) -> Result<CommandOutput, ApiError> {
    let name = command.name();
    tracing::debug!(command = name, ?command, "dispatching");

    let result = tokio::task::spawn_blocking(move || navigator.execute(&command))
        .await
        .map_err(|e| ApiError::internal(format!("{name}: task failed: {e}")))?;

    result.map_err(|err| {
        tracing::warn!(command = name, error = %err, "command failed");
        ApiError::from(err)
    })
}

pub async fn create_session(State(registry): State<SessionRegistry>) -> String {
    registry.create_session()
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn pwd(Session(navigator): Session) -> Result<CommandOutput, ApiError> {
    dispatch(navigator, Command::Pwd).await
}

pub async fn cd(
    Session(navigator): Session,
    Query(query): Query<CdQuery>,
) -> Result<CommandOutput, ApiError> {
    dispatch(navigator, Command::Cd { target: query.dir }).await
}

pub async fn ls(
    Session(navigator): Session,
    Query(query): Query<LsQuery>,
) -> Result<CommandOutput, ApiError> {
    dispatch(
        navigator,
        Command::Ls {
            show_hidden: query.show_hidden(),
        },
    )
    .await
}

pub async fn mkdir(
    Session(navigator): Session,
    Query(query): Query<NameQuery>,
) -> Result<CommandOutput, ApiError> {
    dispatch(navigator, Command::Mkdir { name: query.name }).await
}

pub async fn touch(
    Session(navigator): Session,
    Query(query): Query<NameQuery>,
) -> Result<CommandOutput, ApiError> {
    dispatch(navigator, Command::Touch { name: query.name }).await
}

pub async fn rm(
    Session(navigator): Session,
    Query(query): Query<NameQuery>,
) -> Result<CommandOutput, ApiError> {
    dispatch(navigator, Command::Rm { name: query.name }).await
}

pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}
