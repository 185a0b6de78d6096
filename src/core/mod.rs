//! Core layer: errors, mediator dispatch, result translation, middleware.

pub mod error;
pub mod mapping;
pub mod mediator;
pub mod middleware;
pub mod result;

pub use error::{AppError, ProblemDetails};
pub use mapping::Project;
pub use mediator::{Mediator, Request, RequestHandler};
pub use result::{dispatch, execute_and_respond, execute_map_and_respond, RespondOptions};
