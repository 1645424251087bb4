//! Error response body.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Body returned for every failed request: `{ "name": ..., "details": ... }`.
///
/// `details` is a message string, except for validation failures where it
/// maps each offending field to its message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"name": "InvalidArgumentError", "details": "Invalid postId supplied"}))]
pub struct ErrorResponse {
    pub name: String,
    #[schema(value_type = Object)]
    pub details: Value,
}

impl ErrorResponse {
    pub fn new(name: impl Into<String>, details: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            details: details.into(),
        }
    }

    pub fn validation_failed(fields: Value) -> Self {
        Self::new("Validation Failed", fields)
    }

    pub fn invalid_argument(detail: impl Into<String>) -> Self {
        Self::new("InvalidArgumentError", detail.into())
    }

    pub fn internal_error(detail: impl Into<String>) -> Self {
        Self::new("InternalServerError", detail.into())
    }
}
