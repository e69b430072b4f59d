//! Access control
//!
//! Requests authenticate with a Bearer API key checked in constant time.
//! The middleware attaches an [`AdminContext`] carrying the granted
//! actions; handlers gate themselves with [`AdminContext::check`] at the
//! top of every entry point.

use std::fmt;
use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};
use multiup_core::AppError;
use subtle::ConstantTimeEq;

use crate::error::HttpAppError;
use crate::state::AppState;

/// Admin actions this add-on gates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    List,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Create => write!(f, "create"),
            Action::List => write!(f, "list"),
        }
    }
}

/// Authenticated operator identity with granted actions.
#[derive(Debug, Clone)]
pub struct AdminContext {
    actions: Vec<Action>,
}

impl AdminContext {
    /// Full operator access (the admin API key).
    pub fn operator() -> Self {
        Self {
            actions: vec![Action::Create, Action::List],
        }
    }

    /// Read-only access (the viewer API key).
    pub fn viewer() -> Self {
        Self {
            actions: vec![Action::List],
        }
    }

    /// Fatal per request when the action is not granted; never retried.
    pub fn check(&self, action: Action) -> Result<(), AppError> {
        if self.actions.contains(&action) {
            return Ok(());
        }
        Err(AppError::AccessDenied {
            action: action.to_string(),
        })
    }
}

impl<S> FromRequestParts<S> for AdminContext
where
    S: Send + Sync,
{
    type Rejection = HttpAppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AdminContext>()
            .cloned()
            .ok_or_else(|| {
                HttpAppError(AppError::Unauthorized(
                    "Missing authentication context".to_string(),
                ))
            })
    }
}

fn secure_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "));

    let context = match token {
        Some(token) if secure_compare(token, &state.config.admin_api_key) => {
            AdminContext::operator()
        }
        Some(token)
            if state
                .config
                .viewer_api_key
                .as_deref()
                .map(|key| secure_compare(token, key))
                .unwrap_or(false) =>
        {
            AdminContext::viewer()
        }
        _ => {
            tracing::warn!("Rejected request with missing or invalid API key");
            return HttpAppError(AppError::Unauthorized(
                "Missing or invalid API key".to_string(),
            ))
            .into_response();
        }
    };

    request.extensions_mut().insert(context);
    next.run(request).await
}
