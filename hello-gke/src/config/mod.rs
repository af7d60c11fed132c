use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::path::PathBuf;

pub const SERVICE_NAME: &str = "hello-gke";

/// Mount point of the secret volume.
pub const DEFAULT_SECRET_PATH: &str = "/secrets/DB_PASSWORD";

#[derive(Debug, Clone)]
pub struct Config {
    pub common: core_config::Config,
    pub secret: SecretConfig,
}

#[derive(Debug, Clone)]
pub struct SecretConfig {
    pub path: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        let path = env::var("HELLO_GKE_SECRET_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SECRET_PATH));

        Ok(Self {
            common,
            secret: SecretConfig { path },
        })
    }
}
