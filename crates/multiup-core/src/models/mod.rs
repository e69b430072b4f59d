//! Domain models

pub mod media;
pub mod outcome;

pub use media::{MediaRecord, UrlFormat, DEFAULT_CONTEXT};
pub use outcome::UploadOutcome;
