//! Request handlers

pub mod create;
pub mod multi_upload;
