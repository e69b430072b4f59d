//! Persistence for media records.
//!
//! The HTTP layer only knows the [`MediaStore`] trait; the Postgres
//! implementation backs real deployments and the in-memory one backs
//! tests.

mod memory;
mod postgres;
mod store;

pub use memory::MemoryMediaStore;
pub use postgres::{PgMediaStore, MIGRATOR};
pub use store::MediaStore;
