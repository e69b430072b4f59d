//! Multi-upload entry point.
//!
//! One request moves through: access check -> provider resolution ->
//! binding -> { show form | validate -> (fail | persist) }. At most one
//! persistence write happens per request, and only on a successful
//! submission.

use std::sync::Arc;

use axum::{
    extract::{Multipart, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use multiup_core::models::{MediaRecord, UploadOutcome, UrlFormat, DEFAULT_CONTEXT};
use multiup_core::provider::ProviderDescriptor;
use multiup_core::validation::{validate, UploadBinding, UploadLimits};
use multiup_core::{AppError, UploadStrategy};
use multiup_db::MediaStore;
use serde::{Deserialize, Serialize};

use crate::auth::{Action, AdminContext};
use crate::error::HttpAppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    provider: Option<String>,
    context: Option<String>,
}

/// View-model for the upload form, rendered by the admin widget.
#[derive(Debug, Serialize)]
pub struct UploadFormView {
    pub action: &'static str,
    pub provider: String,
    pub context: String,
    /// Where the widget posts submissions.
    pub form_action: String,
    /// Informational client-side limit, in bytes.
    pub max_upload_filesize: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<String>,
}

fn resolve_provider<'a>(
    state: &'a AppState,
    query: &UploadQuery,
) -> Result<(&'a ProviderDescriptor, String), AppError> {
    let name = query
        .provider
        .as_deref()
        .ok_or_else(|| AppError::InvalidInput("Missing required 'provider' parameter".to_string()))?;
    let provider = state.providers.resolve(name)?;
    let context = query
        .context
        .clone()
        .unwrap_or_else(|| DEFAULT_CONTEXT.to_string());
    Ok((provider, context))
}

fn form_view(state: &AppState, provider: &ProviderDescriptor, context: &str) -> UploadFormView {
    UploadFormView {
        action: "multi_upload",
        provider: provider.name().to_string(),
        context: context.to_string(),
        form_action: state.urls.multi_upload_url(provider.name(), context),
        max_upload_filesize: state.config.max_upload_filesize,
        redirect_to: state.config.redirect_to.clone(),
    }
}

/// `GET /admin/media/multi-upload` - show the empty upload form.
#[tracing::instrument(skip(state, admin), fields(provider = ?query.provider, context = ?query.context))]
pub async fn show_upload_form(
    State(state): State<Arc<AppState>>,
    admin: AdminContext,
    Query(query): Query<UploadQuery>,
) -> Result<Response, HttpAppError> {
    admin.check(Action::Create)?;
    let (provider, context) = resolve_provider(&state, &query)?;
    Ok(Json(form_view(&state, provider, &context)).into_response())
}

/// `POST /admin/media/multi-upload` - handle one submitted file.
#[tracing::instrument(skip(state, admin, multipart), fields(provider = ?query.provider, context = ?query.context))]
pub async fn multi_upload(
    State(state): State<Arc<AppState>>,
    admin: AdminContext,
    Query(query): Query<UploadQuery>,
    multipart: Multipart,
) -> Result<Response, HttpAppError> {
    admin.check(Action::Create)?;
    let (provider, context) = resolve_provider(&state, &query)?;

    // A POST without file data is still the "show the empty form" path.
    let Some(file) = read_file_field(multipart).await? else {
        return Ok(Json(form_view(&state, provider, &context)).into_response());
    };

    let binding = UploadBinding {
        provider_name: provider.name().to_string(),
        context,
        filename: file.filename,
        content_type: file.content_type,
        content: file.content,
    };

    match state.config.upload_strategy {
        UploadStrategy::Validated => {
            let violations = validate(
                &binding,
                provider,
                UploadLimits {
                    max_file_size: state.config.max_upload_filesize,
                },
            );
            if !violations.is_empty() {
                tracing::debug!(count = violations.len(), "Upload rejected by validation");
                let errors = violations.iter().map(|v| v.to_string()).collect();
                return Ok((
                    StatusCode::BAD_REQUEST,
                    Json(UploadOutcome::Error { errors }),
                )
                    .into_response());
            }
            let record = binding.into_record(state.store.new_record());
            persist_and_acknowledge(&state, provider, record).await
        }
        // Deprecated: persists whatever was submitted without validation.
        UploadStrategy::Direct => {
            let record = binding.into_record(state.store.new_record());
            persist_and_acknowledge(&state, provider, record).await
        }
    }
}

struct FilePart {
    filename: String,
    content_type: String,
    content: Bytes,
}

/// Pull the `file` field out of the multipart body, if present.
async fn read_file_field(mut multipart: Multipart) -> Result<Option<FilePart>, HttpAppError> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        HttpAppError(AppError::InvalidInput(format!(
            "Malformed multipart body: {}",
            e
        )))
    })? {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let content = field.bytes().await.map_err(|e| {
            HttpAppError(AppError::InvalidInput(format!(
                "Failed to read uploaded file: {}",
                e
            )))
        })?;
        return Ok(Some(FilePart {
            filename,
            content_type,
            content,
        }));
    }
    Ok(None)
}

/// The single persistence write of the request, plus the JSON ack.
async fn persist_and_acknowledge(
    state: &AppState,
    provider: &ProviderDescriptor,
    record: MediaRecord,
) -> Result<Response, HttpAppError> {
    let saved = state.store.save(record).await?;
    let id = saved
        .id
        .ok_or_else(|| AppError::Internal("Store returned record without id".to_string()))?;
    let path = provider
        .public_url(&saved, UrlFormat::Admin)
        .ok_or_else(|| AppError::Internal("Persisted record has no public URL".to_string()))?;

    tracing::info!(media_id = %id, provider = provider.name(), "Media uploaded");

    Ok(Json(UploadOutcome::Ok {
        path,
        edit: state.urls.edit_url(id),
        id,
    })
    .into_response())
}
