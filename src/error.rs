use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application level error, rendered as an RFC 7807 style problem response.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("forbidden")]
    Forbidden,

    #[error("validation failed")]
    Validation(validator::ValidationErrors),

    #[error("internal server error")]
    Internal(String),
}

impl From<weekbasket_shared::Error> for AppError {
    fn from(err: weekbasket_shared::Error) -> Self {
        match err {
            weekbasket_shared::Error::Validate(errors) => AppError::Validation(errors),
            weekbasket_shared::Error::Forbidden => AppError::Forbidden,
            weekbasket_shared::Error::NotFound(what) => AppError::NotFound(what),
            weekbasket_shared::Error::Server(msg) => AppError::Internal(msg),
            weekbasket_shared::Error::Unknown(err) => AppError::Internal(err.to_string()),
        }
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (slug, title) = match &self {
            AppError::NotFound(_) => ("not-found", "Resource Not Found"),
            AppError::Forbidden => ("forbidden", "Forbidden"),
            AppError::Validation(_) => ("validation-error", "Validation Error"),
            AppError::Internal(_) => ("internal-error", "Internal Server Error"),
        };

        let detail = match &self {
            // Internal details are logged, not sent to the client.
            AppError::Internal(detail) => {
                tracing::error!(err = %detail, "request failed");
                "an unexpected error occurred".to_string()
            }
            other => other.to_string(),
        };

        let mut body = json!({
            "type": format!("https://weekbasket.app/problems/{slug}"),
            "title": title,
            "status": status.as_u16(),
            "detail": detail,
        });

        if let AppError::Validation(errors) = &self {
            body["errors"] = field_errors(errors);
        }

        (status, Json(body)).into_response()
    }
}

fn field_errors(errors: &validator::ValidationErrors) -> serde_json::Value {
    let map: serde_json::Map<String, serde_json::Value> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let message = errs
                .iter()
                .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
                .unwrap_or_else(|| "invalid value".to_string());
            (field.to_string(), serde_json::Value::String(message))
        })
        .collect();
    serde_json::Value::Object(map)
}
