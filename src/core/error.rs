//! Core error handling: the application error type and its problem-details rendering.

use std::collections::BTreeMap;

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;
use validator::ValidationErrors;

/// Error flowing out of handlers and the mediator.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    NotImplemented(String),
    #[error("{0}")]
    InvalidOperation(String),
    #[error("{0}")]
    InvalidArgument(String),
    #[error("{0}")]
    InvalidCredentials(String),
    #[error("{0}")]
    UnauthorizedAccess(String),
    #[error("one or more validation errors occurred")]
    Validation(ValidationErrors),
    #[error("no handler registered for request type {0}")]
    Registration(&'static str),
}

impl AppError {
    /// Fixed error-to-status table. Unlisted kinds fall back to 400.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            AppError::InvalidOperation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials(_) => StatusCode::UNAUTHORIZED,
            AppError::UnauthorizedAccess(_) => StatusCode::FORBIDDEN,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// Short name of the error kind, used as the problem `type` and `title`.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NotFound",
            AppError::NotImplemented(_) => "NotImplemented",
            AppError::InvalidOperation(_) => "InvalidOperation",
            AppError::InvalidArgument(_) => "InvalidArgument",
            AppError::InvalidCredentials(_) => "InvalidCredentials",
            AppError::UnauthorizedAccess(_) => "UnauthorizedAccess",
            AppError::Validation(_) => "Validation",
            AppError::Registration(_) => "Registration",
        }
    }

    pub fn to_problem(&self) -> ProblemDetails {
        let mut problem = ProblemDetails::new(self.kind(), self.status_code(), self.to_string());
        if let AppError::Validation(errors) = self {
            problem.errors = Some(field_errors(errors));
        }
        problem
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        AppError::Validation(err)
    }
}

/// Flattens validator output into `field -> [code, message, ...]`.
fn field_errors(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let entries = errors
                .iter()
                .flat_map(|error| {
                    let message = error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| "Validation error".to_string());
                    [error.code.to_string(), message]
                })
                .collect();
            (field.to_string(), entries)
        })
        .collect()
}

/// Problem-details payload returned for every failed request.
#[derive(Debug, Clone, Serialize)]
pub struct ProblemDetails {
    /// Error kind name, serialized as `type`
    #[serde(rename = "type")]
    pub kind: String,
    /// Same as the kind name
    pub title: String,
    /// HTTP status code
    pub status: u16,
    /// Error message
    pub detail: String,
    /// `traceId` and `timestamp` of this failure
    pub extensions: Map<String, Value>,
    /// Per-field `[code, message]` entries for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl ProblemDetails {
    pub fn new(kind: &str, status: StatusCode, detail: impl Into<String>) -> Self {
        let mut extensions = Map::new();
        extensions.insert("traceId".to_string(), Value::String(Uuid::new_v4().to_string()));
        extensions.insert(
            "timestamp".to_string(),
            Value::String(chrono::Utc::now().to_rfc3339()),
        );

        Self {
            kind: kind.to_string(),
            title: kind.to_string(),
            status: status.as_u16(),
            detail: detail.into(),
            extensions,
            errors: None,
        }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::BAD_REQUEST)
    }
}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut response = (status, Json(self)).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/problem+json"),
        );
        response
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.to_problem().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn status_table_matches_error_kinds() {
        let cases = [
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::NotImplemented("x".into()), StatusCode::NOT_IMPLEMENTED),
            (AppError::InvalidOperation("x".into()), StatusCode::BAD_REQUEST),
            (AppError::InvalidCredentials("x".into()), StatusCode::UNAUTHORIZED),
            (AppError::UnauthorizedAccess("x".into()), StatusCode::FORBIDDEN),
            (AppError::InvalidArgument("x".into()), StatusCode::BAD_REQUEST),
            (AppError::Registration("GetAll"), StatusCode::BAD_REQUEST),
        ];

        for (error, expected) in cases {
            assert_eq!(error.status_code(), expected, "{}", error.kind());
        }
    }

    #[test]
    fn validation_problem_lists_field_errors() {
        let mut errors = ValidationErrors::new();
        let mut error = ValidationError::new("blank_name");
        error.message = Some("Product name cannot be empty.".into());
        errors.add("name", error);

        let problem = AppError::from(errors).to_problem();

        assert_eq!(problem.status, 400);
        assert_eq!(problem.kind, "Validation");
        let fields = problem.errors.expect("field errors");
        assert_eq!(
            fields["name"],
            vec!["blank_name".to_string(), "Product name cannot be empty.".to_string()]
        );
    }

    #[test]
    fn problem_carries_trace_extensions() {
        let problem = AppError::NotFound("product 7 not found".into()).to_problem();

        assert_eq!(problem.detail, "product 7 not found");
        assert!(problem.extensions.contains_key("traceId"));
        assert!(problem.extensions.contains_key("timestamp"));
        assert!(problem.errors.is_none());
    }

    #[test]
    fn problem_response_uses_problem_json_content_type() {
        let response = AppError::UnauthorizedAccess("nope".into()).into_response();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE].to_str().unwrap(),
            "application/problem+json"
        );
    }
}
