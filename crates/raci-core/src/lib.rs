//! Core types and trait definitions for the RACI matrix.
//!
//! This crate is deliberately free of terminal and database dependencies.
//! The store backend and the CLI depend on it; it depends on nothing of
//! theirs.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod activity;
pub mod error;
pub mod matrix;
pub mod role;
pub mod store;

pub use error::{Error, Result, ValidationError};
