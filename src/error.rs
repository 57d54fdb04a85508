use axum::extract::rejection::JsonRejection;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")] Database(#[from] sea_orm::DbErr),

    #[error("Validation error: {message}")] Validation {
        message: String,
        field: Option<String>,
    },

    #[error("Authentication required")]
    Authentication,

    #[error("Configuration error: {0}")] Config(String),

    #[error("Internal error: {0}")] Internal(String),
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(serde::Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    pub fn to_error_response(&self) -> ErrorResponse {
        let (code, message, field) = match self {
            AppError::Database(_) =>
                ("DATABASE_ERROR", "A database error occurred".to_string(), None),
            AppError::Validation { message, field } =>
                ("VALIDATION_ERROR", message.clone(), field.clone()),
            AppError::Authentication =>
                ("AUTHENTICATION_ERROR", "You must be logged in to access this".to_string(), None),
            AppError::Config(msg) => ("CONFIG_ERROR", msg.clone(), None),
            AppError::Internal(msg) => ("INTERNAL_ERROR", msg.clone(), None),
        };

        ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                field,
            },
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        let field = match &rejection {
            JsonRejection::JsonDataError(_) => missing_or_invalid_field(&message),
            _ => None,
        };

        AppError::Validation { message, field }
    }
}

/// Best-effort: pulls the offending field name out of a deserialization
/// message, either "missing field `title`" or a path-prefixed
/// "id: invalid type: ...". Depends on axum/serde wording and returns `None`
/// for anything it does not recognise.
fn missing_or_invalid_field(message: &str) -> Option<String> {
    let detail = message
        .split_once("target type: ")
        .map(|(_, rest)| rest)
        .unwrap_or(message);

    if let Some(start) = detail.find("missing field `") {
        let rest = &detail[start + "missing field `".len()..];
        let end = rest.find('`')?;
        return Some(rest[..end].to_string());
    }

    let (path, _) = detail.split_once(": ")?;
    if path.is_empty() || path.contains(char::is_whitespace) {
        return None;
    }
    Some(path.to_string())
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::Validation { .. } => axum::http::StatusCode::BAD_REQUEST,
            AppError::Authentication => axum::http::StatusCode::UNAUTHORIZED,
            _ => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let response = self.to_error_response();
        (status, axum::Json(response)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
