//! Create entry point: provider selection in front of the generic create
//! flow.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::Method,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use multiup_core::provider::ProviderView;
use serde::{Deserialize, Serialize};

use crate::auth::{Action, AdminContext};
use crate::error::HttpAppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateQuery {
    provider: Option<String>,
    context: Option<String>,
}

/// View-model for the provider-selection screen.
#[derive(Debug, Serialize)]
pub struct SelectProviderView {
    pub action: &'static str,
    pub context: String,
    pub providers: Vec<ProviderView>,
}

/// `GET/POST /admin/media/create`
///
/// A GET without a provider is the "pick a provider first" step: a pure
/// read returning the providers applicable to the requested context.
/// Anything else belongs to the host framework's generic create flow and
/// is answered with a redirect to it.
#[tracing::instrument(skip(state, admin), fields(provider = ?query.provider, context = ?query.context))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    admin: AdminContext,
    method: Method,
    Query(query): Query<CreateQuery>,
) -> Result<Response, HttpAppError> {
    admin.check(Action::Create)?;

    if query.provider.is_none() && method == Method::GET {
        let context = query
            .context
            .unwrap_or_else(|| state.providers.default_context().to_string());
        let providers = state
            .providers
            .providers_by_context(&context)
            .into_iter()
            .map(|p| p.view())
            .collect();

        return Ok(Json(SelectProviderView {
            action: "create",
            context,
            providers,
        })
        .into_response());
    }

    Ok(Redirect::to(&state.urls.generic_create_url()).into_response())
}
