//! Multiup API library
//!
//! HTTP surface of the multi-upload admin add-on: handlers, access-control
//! middleware, and application setup.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
pub mod telemetry;
pub mod urls;

pub use error::ErrorResponse;
