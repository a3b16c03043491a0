use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unable to convert {0:?} to a stock id")]
    InvalidId(String),

    #[error("Unable to decode the request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Database error: {0}")]
    Database(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(rejection) => rejection.status(),
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // client errors echo the reason, database failures are logged and stay opaque
        let message = match &self {
            ApiError::Database(err) => {
                tracing::error!("Database error: {:#}", err);
                "Database error".to_string()
            }
            _ => {
                tracing::debug!("Rejected request: {}", self);
                self.to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
