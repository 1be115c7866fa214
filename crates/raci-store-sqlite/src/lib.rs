//! SQLite backend for the RACI matrix.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, ErrorKind, Result};
pub use store::SqliteStore;
