//! Products: model, store, queries, commands and their HTTP endpoints.

pub mod commands;
pub mod handler;
pub mod model;
pub mod queries;
pub mod store;
pub mod user_handler;

pub use model::{Product, ProductDto, ProductId};
pub use store::{InMemoryProductStore, ProductStore};
