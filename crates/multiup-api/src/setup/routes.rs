//! Route configuration and setup

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::auth::auth_middleware;
use crate::handlers;
use crate::state::AppState;

/// Slack on top of the configured upload limit. Oversized files within
/// this bound reach the validated strategy, which reports them itself.
const BODY_LIMIT_SLACK: usize = 1024 * 1024;

/// Build the application router with all middleware applied.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/admin/media/create",
            get(handlers::create::create).post(handlers::create::create),
        )
        .route(
            "/admin/media/multi-upload",
            get(handlers::multi_upload::show_upload_form)
                .post(handlers::multi_upload::multi_upload),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .layer(RequestBodyLimitLayer::new(
            state.config.max_upload_filesize + BODY_LIMIT_SLACK,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
