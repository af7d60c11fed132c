use hello_gke::config::{Config, SecretConfig};
use hello_gke::Application;
use service_core::config as core_config;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SENTINEL_SHA256: &str =
    "ffa63583dfa6706b87d284b86b0d693a161e4840aad2c5cf6b5d27c3b9621f7d";
pub const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
pub const SEKRET_SHA256: &str = "bb757689c39373a6cac9ef6ba55616c6249d7500ca4d443f1130c4766453a412";

pub struct TestApp {
    pub address: String,
    pub secret_path: PathBuf,
    // Keeps the secret directory alive for the test's duration.
    secret_dir: TempDir,
}

impl TestApp {
    /// Spawn the service with its secret mount pointed at an empty temp dir.
    pub async fn spawn() -> Self {
        let secret_dir = tempfile::tempdir().expect("Failed to create secret dir");
        let secret_path = secret_dir.path().join("DB_PASSWORD");
        Self::spawn_with_path(secret_dir, secret_path).await
    }

    /// Spawn the service reading its secret from `path` inside `dir`.
    pub async fn spawn_with_path(dir: TempDir, path: PathBuf) -> Self {
        let config = Config {
            common: core_config::Config {
                port: 0, // Random port
                ..core_config::Config::default()
            },
            secret: SecretConfig { path: path.clone() },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address,
            secret_path: path,
            secret_dir: dir,
        }
    }

    pub fn secret_dir(&self) -> &Path {
        self.secret_dir.path()
    }

    pub fn write_secret(&self, contents: &str) {
        std::fs::write(&self.secret_path, contents).expect("Failed to write secret file");
    }

    pub async fn get_root(&self) -> reqwest::Response {
        reqwest::Client::new()
            .get(&format!("{}/", self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }
}
