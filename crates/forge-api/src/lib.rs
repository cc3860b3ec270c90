//! # forge-api: HTTP Service for Class Forge
//!
//! Exposes the object handler over HTTP so clients can declare data
//! shapes, read them back, replace or remove them, instantiate them and
//! fetch their readable listings.
//!
//! ## API Surface
//!
//! | Prefix                 | Module               | Domain            |
//! |------------------------|----------------------|-------------------|
//! | `/api/v1/objects/*`    | [`routes::objects`]  | Shape declarations |
//! | `/health/*`            | this module          | Probes            |
//! | `/openapi.json`        | [`openapi`]          | OpenAPI document  |
//!
//! ## Middleware Stack
//!
//! ```text
//! TraceLayer → Handler
//! ```

pub mod config;
pub mod error;
pub mod extractors;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Request body ceiling for declaration uploads.
const BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Assemble the full application router.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::objects::router())
        .merge(openapi::router())
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    let probes = Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
        .with_state(state);

    Router::new().merge(probes).merge(api)
}

/// Liveness probe: the process is up.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe: the store directory is reachable.
///
/// Returns 200 "ready" or 503 with a diagnostic message.
async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    let root = state.handler.store().root();
    match tokio::fs::metadata(root).await {
        Ok(meta) if meta.is_dir() => (StatusCode::OK, "ready").into_response(),
        Ok(_) => (StatusCode::SERVICE_UNAVAILABLE, "store root is not a directory").into_response(),
        Err(e) => {
            tracing::warn!(root = %root.display(), error = %e, "store root unreachable");
            (StatusCode::SERVICE_UNAVAILABLE, "store unreachable").into_response()
        }
    }
}
