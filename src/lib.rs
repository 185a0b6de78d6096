//! # Product catalog API
//!
//! A small CRUD service over an in-memory product store:
//! - `core`: application errors, the request mediator and result translation to HTTP
//! - `app`: product model, store, queries, commands and endpoints
//! - `infrastructure`: configuration and logging

pub mod app;
pub mod core;
pub mod infrastructure;

pub use crate::app::{build_mediator, router, AppState};
pub use crate::core::error::AppError;
