//! Configuration module
//!
//! Configuration comes from the environment (a `.env` file is honored in
//! development). `Config::from_env` applies defaults where sensible and
//! `validate` fails fast on anything the server cannot run without.

use std::env;

use crate::error::AppError;

const DEFAULT_SERVER_PORT: u16 = 3000;
/// 10 MiB, surfaced in the upload form view and enforced by validation.
const DEFAULT_MAX_UPLOAD_FILESIZE: usize = 10 * 1024 * 1024;

/// Which submission strategy the upload endpoint runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStrategy {
    /// Bind then validate then persist. The production default.
    Validated,
    /// Persist unconditionally without validation. Deprecated; kept only
    /// for parity with legacy deployments.
    Direct,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub database_url: String,
    /// Bearer key operators authenticate with.
    pub admin_api_key: String,
    /// Optional read-only key; holders may browse but not create media.
    pub viewer_api_key: Option<String>,
    /// Base URL providers build public media URLs under.
    pub public_base_url: String,
    /// Base URL of the admin panel, for edit links and form actions.
    pub admin_base_url: String,
    pub max_upload_filesize: usize,
    /// Optional post-submit redirect target surfaced in the form view.
    pub redirect_to: Option<String>,
    pub upload_strategy: UploadStrategy,
    /// Contexts offered by the select-provider view.
    pub contexts: Vec<String>,
    pub image_allowed_extensions: Vec<String>,
    pub image_allowed_content_types: Vec<String>,
    pub video_allowed_extensions: Vec<String>,
    pub video_allowed_content_types: Vec<String>,
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_list(key: &str, default: &str) -> Vec<String> {
    env_or(key, default)
        .split(',')
        .map(|s| s.trim().to_ascii_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let server_port = env_or("SERVER_PORT", &DEFAULT_SERVER_PORT.to_string())
            .parse::<u16>()
            .map_err(|e| AppError::Internal(format!("Invalid SERVER_PORT: {}", e)))?;

        let max_upload_filesize = env_or(
            "MAX_UPLOAD_FILESIZE",
            &DEFAULT_MAX_UPLOAD_FILESIZE.to_string(),
        )
        .parse::<usize>()
        .map_err(|e| AppError::Internal(format!("Invalid MAX_UPLOAD_FILESIZE: {}", e)))?;

        let upload_strategy = match env_or("UPLOAD_STRATEGY", "validated").as_str() {
            "validated" => UploadStrategy::Validated,
            "direct" => UploadStrategy::Direct,
            other => {
                return Err(AppError::Internal(format!(
                    "Invalid UPLOAD_STRATEGY '{}': expected 'validated' or 'direct'",
                    other
                )))
            }
        };

        let config = Self {
            server_port,
            database_url: env_or("DATABASE_URL", ""),
            admin_api_key: env_or("ADMIN_API_KEY", ""),
            viewer_api_key: env::var("VIEWER_API_KEY").ok().filter(|s| !s.is_empty()),
            public_base_url: env_or("PUBLIC_BASE_URL", "http://localhost:3000/media"),
            admin_base_url: env_or("ADMIN_BASE_URL", "http://localhost:3000/admin"),
            max_upload_filesize,
            redirect_to: env::var("REDIRECT_TO").ok().filter(|s| !s.is_empty()),
            upload_strategy,
            contexts: env_list("MEDIA_CONTEXTS", "default"),
            image_allowed_extensions: env_list(
                "IMAGE_ALLOWED_EXTENSIONS",
                "jpg,jpeg,png,gif,webp",
            ),
            image_allowed_content_types: env_list(
                "IMAGE_ALLOWED_CONTENT_TYPES",
                "image/jpeg,image/png,image/gif,image/webp",
            ),
            video_allowed_extensions: env_list("VIDEO_ALLOWED_EXTENSIONS", "mp4,webm,mov"),
            video_allowed_content_types: env_list(
                "VIDEO_ALLOWED_CONTENT_TYPES",
                "video/mp4,video/webm,video/quicktime",
            ),
        };

        config.validate()?;
        Ok(config)
    }

    /// Fail fast on misconfiguration instead of failing on first request.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.admin_api_key.is_empty() {
            return Err(AppError::Internal(
                "ADMIN_API_KEY must be configured".to_string(),
            ));
        }
        if self.database_url.is_empty() {
            return Err(AppError::Internal(
                "DATABASE_URL must be configured".to_string(),
            ));
        }
        if self.max_upload_filesize == 0 {
            return Err(AppError::Internal(
                "MAX_UPLOAD_FILESIZE must be greater than zero".to_string(),
            ));
        }
        if self.contexts.is_empty() {
            return Err(AppError::Internal(
                "MEDIA_CONTEXTS must name at least one context".to_string(),
            ));
        }
        Ok(())
    }
}
