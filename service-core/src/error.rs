use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::secrets::SecretError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Secret source error: {0}")]
    SecretSource(#[from] SecretError),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalError(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: &'static str,
        }

        // Every variant surfaces as the same generic failure; detail goes to the log.
        match self {
            AppError::SecretSource(err) => {
                tracing::error!(error = %err, "Secret source could not be read");
            }
            AppError::InternalError(err) => {
                tracing::error!(error = ?err, "Unhandled internal error");
            }
            AppError::ConfigError(err) => {
                tracing::error!(error = %err, "Configuration error");
            }
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Internal server error",
            }),
        )
            .into_response()
    }
}
