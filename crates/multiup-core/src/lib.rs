//! Core domain types for the multi-upload admin add-on.
//!
//! This crate holds everything the HTTP layer and the stores share:
//! the media record model, the provider pool, upload validation,
//! configuration, and the unified error type.

pub mod config;
pub mod error;
pub mod models;
pub mod provider;
pub mod validation;

pub use config::{Config, UploadStrategy};
pub use error::{AppError, ErrorMetadata, LogLevel};
