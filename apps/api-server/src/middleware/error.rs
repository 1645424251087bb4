//! Error handling middleware - maps failures onto `{name, details}` responses.
//!
//! | Failure                                   | Status |
//! |-------------------------------------------|--------|
//! | malformed body, path or field             | 422    |
//! | missing entity, invalid state transition  | 400    |
//! | anything else (store faults included)     | 500    |

use std::fmt;

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use chatdev_core::{DomainError, RepoError};
use chatdev_shared::ErrorResponse;
use serde_json::{Map, Value, json};
use validator::ValidationErrors;

/// Application-level error type that converts to `ErrorResponse` bodies.
#[derive(Debug)]
pub enum AppError {
    /// Request shape rejected; `details` maps fields to messages.
    Validation(Value),
    InvalidArgument(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(details) => write!(f, "Validation failed: {}", details),
            AppError::InvalidArgument(msg) => write!(f, "InvalidArgumentError: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::Validation(details) => {
                tracing::warn!(%details, "Caught validation error");
                ErrorResponse::validation_failed(details.clone())
            }
            AppError::InvalidArgument(detail) => {
                tracing::error!("InvalidArgumentError: {}", detail);
                ErrorResponse::invalid_argument(detail)
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error(detail)
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { message, .. } => AppError::InvalidArgument(message.to_string()),
            DomainError::InvalidState(msg) => AppError::InvalidArgument(msg),
            DomainError::Validation(msg) => AppError::Validation(Value::String(msg)),
            DomainError::Repository(err) => err.into(),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::InvalidArgument("Resource not found".to_string()),
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) | RepoError::Constraint(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = Map::new();
        for (field, errs) in errors.field_errors() {
            let message = errs
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("invalid {}", camel_case(&field)));
            fields.insert(camel_case(&field), json!({ "message": message }));
        }
        AppError::Validation(Value::Object(fields))
    }
}

/// Error handler for `web::JsonConfig`: malformed bodies become 422s.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::Validation(json!({ "requestBody": { "message": err.to_string() } })).into()
}

/// Error handler for `web::PathConfig`: unparseable ids become 422s.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    AppError::Validation(json!({ "postId": { "message": err.to_string() } })).into()
}

/// `net_id` -> `netId`, matching the wire names.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
