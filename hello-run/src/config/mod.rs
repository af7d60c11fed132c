use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

pub const SERVICE_NAME: &str = "hello-run";

/// Environment variable the platform injects the secret into.
pub const DEFAULT_SECRET_ENV: &str = "DB_PASSWORD";

#[derive(Debug, Clone)]
pub struct Config {
    pub common: core_config::Config,
    pub secret: SecretConfig,
}

#[derive(Debug, Clone)]
pub struct SecretConfig {
    pub env_var: String,
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        let mut common = core_config::Config::load()?;

        // Cloud Run assigns the listening port through PORT.
        if let Ok(port) = env::var("PORT") {
            common.port = port.parse().map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!("Invalid PORT value {:?}: {}", port, e))
            })?;
        }

        let env_var =
            env::var("HELLO_RUN_SECRET_ENV").unwrap_or_else(|_| DEFAULT_SECRET_ENV.to_string());

        Ok(Self {
            common,
            secret: SecretConfig { env_var },
        })
    }
}
