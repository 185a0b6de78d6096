//! Translation of mediator outcomes into HTTP responses.

use std::any::type_name;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::debug;

use super::{
    error::AppError,
    mapping::Project,
    mediator::{Mediator, Request},
};

/// How an empty success value is answered.
#[derive(Debug, Clone, Copy, Default)]
pub struct RespondOptions {
    pub not_found_on_empty: bool,
}

impl RespondOptions {
    pub fn not_found_on_empty() -> Self {
        Self {
            not_found_on_empty: true,
        }
    }
}

/// A handler result that may be empty.
pub trait ResponseValue {
    type Body;

    fn into_body(self) -> Option<Self::Body>;
}

impl<T> ResponseValue for Option<T> {
    type Body = T;

    fn into_body(self) -> Option<T> {
        self
    }
}

impl<T> ResponseValue for Vec<T> {
    type Body = Vec<T>;

    fn into_body(self) -> Option<Vec<T>> {
        Some(self)
    }
}

impl ResponseValue for f64 {
    type Body = f64;

    fn into_body(self) -> Option<f64> {
        Some(self)
    }
}

/// Sends `request` through the mediator, logging the request type first.
///
/// Failures are annotated as handled in the debug log and returned unchanged.
pub async fn dispatch<R: Request>(
    mediator: &Mediator,
    request: R,
) -> Result<R::Response, AppError> {
    let request_type = type_name::<R>();
    debug!(request = request_type, "dispatching mediator request");

    mediator.send(request).await.map_err(|err| {
        debug!(
            request = request_type,
            nfo = "Handled",
            kind = err.kind(),
            error = %err,
            "mediator request failed"
        );
        err
    })
}

/// Dispatches `request` and answers 200 with the value, 404/204 when empty,
/// or a problem response on failure.
pub async fn execute_and_respond<R>(
    mediator: &Mediator,
    request: R,
    options: RespondOptions,
) -> Response
where
    R: Request,
    R::Response: ResponseValue,
    <R::Response as ResponseValue>::Body: Serialize,
{
    match dispatch(mediator, request).await {
        Ok(value) => respond(value.into_body(), options),
        Err(err) => err.into_response(),
    }
}

/// Like [`execute_and_respond`], projecting the value onto `D` before responding.
pub async fn execute_map_and_respond<R, D>(
    mediator: &Mediator,
    request: R,
    options: RespondOptions,
) -> Response
where
    R: Request,
    R::Response: ResponseValue,
    <R::Response as ResponseValue>::Body: Project<D>,
    D: Serialize,
{
    match dispatch(mediator, request).await {
        Ok(value) => respond::<D>(value.into_body().map(Project::<D>::project), options),
        Err(err) => err.into_response(),
    }
}

fn respond<T: Serialize>(body: Option<T>, options: RespondOptions) -> Response {
    match body {
        Some(body) => (StatusCode::OK, Json(body)).into_response(),
        None if options.not_found_on_empty => StatusCode::NOT_FOUND.into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}
