//! Application startup and lifecycle management.

use crate::config::{Config, SERVICE_NAME};
use crate::handlers;
use axum::{routing::get, Router};
use service_core::error::AppError;
use service_core::middleware;
use service_core::secrets::{SecretProbe, SecretSource};
use service_core::shutdown::shutdown_signal;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub probe: Arc<SecretProbe>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            probe: Arc::new(SecretProbe::new(
                SERVICE_NAME,
                SecretSource::env(config.secret.env_var.clone()),
            )),
        }
    }
}

pub fn router(state: AppState) -> Router {
    middleware::apply(Router::new().route("/", get(handlers::read_root))).with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
}

impl Application {
    pub async fn build(config: Config) -> Result<Self, AppError> {
        let state = AppState::new(&config);
        tracing::info!(
            service = state.probe.service(),
            source = %state.probe.source(),
            "Secret source configured"
        );

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("{} listening on port {}", SERVICE_NAME, port);

        Ok(Self {
            port,
            listener,
            router: router(state),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}
