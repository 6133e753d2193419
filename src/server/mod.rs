//! HTTP boundary: maps routes onto navigator commands.
//!
//! | Route          | Query            | Command |
//! |----------------|------------------|---------|
//! | `/auth`        |                  | create a session, body is the token |
//! | `/pwd`         |                  | `pwd`   |
//! | `/cd`          | `dir`            | `cd`    |
//! | `/ls`          | `hidden`         | `ls`    |
//! | `/mkdir`       | `name`           | `mkdir` |
//! | `/touch`       | `name`           | `touch` |
//! | `/rm`          | `name`           | `rm`    |
//!
//! Session routes take the token from the `X-Session-Token` header or a
//! `token` query parameter.

pub mod error;
pub mod handlers;

use anyhow::Result;
use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::session::SessionRegistry;
pub use error::ApiError;
pub use handlers::TOKEN_HEADER;

/// Build the router with every route wired to `registry`
pub fn build_router(registry: SessionRegistry) -> Router {
    Router::new()
        .route(
            "/auth",
            get(handlers::create_session).post(handlers::create_session),
        )
        .route("/health", get(handlers::health))
        .route("/pwd", get(handlers::pwd))
        .route("/cd", get(handlers::cd).post(handlers::cd))
        .route("/ls", get(handlers::ls))
        .route("/mkdir", get(handlers::mkdir).post(handlers::mkdir))
        .route("/touch", get(handlers::touch).post(handlers::touch))
        .route("/rm", get(handlers::rm).post(handlers::rm))
        .fallback(handlers::not_found)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(registry)
}

/// Bind and serve until the process is stopped
pub async fn serve(config: Config) -> Result<()> {
    let registry = SessionRegistry::new(config.root.clone(), config.token_length);
    let listener = TcpListener::bind(config.bind).await?;

    tracing::info!(addr = %config.bind, root = %config.root, "filesh listening");
    axum::serve(listener, build_router(registry)).await?;
    Ok(())
}
