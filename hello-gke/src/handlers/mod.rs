//! HTTP handlers for hello-gke.

use axum::{extract::State, Json};
use service_core::error::AppError;
use service_core::secrets::SecretProbeResult;

use crate::startup::AppState;

/// `GET /`: report whether the mounted secret is present, and its digest.
pub async fn read_root(State(state): State<AppState>) -> Result<Json<SecretProbeResult>, AppError> {
    let result = state.probe.probe().await?;
    Ok(Json(result))
}
