use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use tracing::error;
use validator::ValidationErrors;

#[derive(Debug)]
pub enum HttpError {
    Validation {
        message: String,
        details: Option<Value>,
    },
    InvalidRange(String),
    NotFound(String),
    Conflict(String),
    Internal(String),
}

impl HttpError {
    fn status_code(&self) -> StatusCode {
        match self {
            HttpError::Validation { .. } | HttpError::InvalidRange(_) => StatusCode::BAD_REQUEST,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::Conflict(_) => StatusCode::CONFLICT,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            HttpError::Validation { .. } => "validation_error",
            HttpError::InvalidRange(_) => "invalid_range",
            HttpError::NotFound(_) => "not_found",
            HttpError::Conflict(_) => "conflict",
            HttpError::Internal(_) => "internal_error",
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        HttpError::Validation {
            message: message.into(),
            details: None,
        }
    }
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(errors) => HttpError::Validation {
                message: errors.join("; "),
                details: Some(json!(errors)),
            },
            ServiceError::InvalidRange(msg) => HttpError::InvalidRange(msg),
            ServiceError::NotFound(msg) => HttpError::NotFound(msg),
            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::AlreadyExists(msg) => {
                    HttpError::Conflict(format!("Already exists: {msg}"))
                }
                RepositoryError::ForeignKey(msg) => {
                    HttpError::validation(format!("Foreign key violation: {msg}"))
                }
                other => {
                    error!("❌ Repository failure surfaced to HTTP: {other:?}");
                    HttpError::Internal("Repository error".into())
                }
            },
            ServiceError::Internal(msg) => {
                error!("❌ Internal failure surfaced to HTTP: {msg}");
                HttpError::Internal("Internal server error".into())
            }
        }
    }
}

impl From<ValidationErrors> for HttpError {
    fn from(errors: ValidationErrors) -> Self {
        HttpError::Validation {
            message: format_validation_errors(&errors),
            details: Some(format_validation_errors_detailed(&errors)),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code().to_string();

        let (message, details) = match self {
            HttpError::Validation { message, details } => (message, details),
            HttpError::InvalidRange(msg)
            | HttpError::NotFound(msg)
            | HttpError::Conflict(msg)
            | HttpError::Internal(msg) => (msg, None),
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            code,
            message,
            details,
        });

        (status, body).into_response()
    }
}

fn describe(field: &str, error: &validator::ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| match error.code.as_ref() {
            "length" => "Invalid length".to_string(),
            "range" => "Value out of range".to_string(),
            "custom" => "Custom validation failed".to_string(),
            _ => format!("Invalid {field}"),
        })
}

fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut error_messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            error_messages.push(format!("{field}: {}", describe(&field, error)));
        }
    }

    if error_messages.is_empty() {
        "Validation failed".to_string()
    } else {
        error_messages.sort();
        error_messages.join("; ")
    }
}

fn format_validation_errors_detailed(errors: &ValidationErrors) -> Value {
    let mut error_map = serde_json::Map::new();

    for (field, field_errors) in errors.field_errors() {
        let messages: Vec<String> = field_errors.iter().map(|e| describe(&field, e)).collect();
        error_map.insert(field.to_string(), json!(messages));
    }

    Value::Object(error_map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_keep_their_kind() {
        let range = HttpError::from(ServiceError::InvalidRange("start after end".into()));
        assert_eq!(range.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(range.code(), "invalid_range");

        let validation = HttpError::from(ServiceError::Validation(vec!["bad date".into()]));
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(validation.code(), "validation_error");

        let missing = HttpError::from(ServiceError::not_found("Product", 7));
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(missing.code(), "not_found");
    }

    #[test]
    fn unique_violation_is_conflict() {
        let err = HttpError::from(ServiceError::Repo(RepositoryError::AlreadyExists(
            "categories_name_key".into(),
        )));
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn internal_details_are_not_leaked() {
        let err = HttpError::from(ServiceError::Internal("connection refused".into()));
        match err {
            HttpError::Internal(msg) => assert!(!msg.contains("refused")),
            other => panic!("unexpected {other:?}"),
        }
    }
}
