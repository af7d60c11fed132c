//! HTTP handlers for hello-run.

use axum::{extract::State, Json};
use service_core::error::AppError;
use service_core::secrets::SecretProbeResult;

use crate::startup::AppState;

/// `GET /`: report whether the secret variable is set, and its digest.
///
/// The variable is read on every request, never cached.
pub async fn read_root(State(state): State<AppState>) -> Result<Json<SecretProbeResult>, AppError> {
    Ok(Json(state.probe.probe().await?))
}
