use hello_run::config::{Config, SecretConfig};
use hello_run::Application;
use service_core::config as core_config;

pub const SENTINEL_SHA256: &str =
    "ffa63583dfa6706b87d284b86b0d693a161e4840aad2c5cf6b5d27c3b9621f7d";
pub const SEKRET_SHA256: &str = "bb757689c39373a6cac9ef6ba55616c6249d7500ca4d443f1130c4766453a412";

pub struct TestApp {
    pub address: String,
    pub env_var: String,
}

impl TestApp {
    /// Spawn the service reading its secret from `env_var`.
    ///
    /// Each test uses its own variable name so values never leak across tests.
    pub async fn spawn(env_var: &str) -> Self {
        let config = Config {
            common: core_config::Config {
                port: 0, // Random port
                ..core_config::Config::default()
            },
            secret: SecretConfig {
                env_var: env_var.to_string(),
            },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address,
            env_var: env_var.to_string(),
        }
    }

    pub fn set_secret(&self, value: &str) {
        std::env::set_var(&self.env_var, value);
    }

    pub fn clear_secret(&self) {
        std::env::remove_var(&self.env_var);
    }

    pub async fn get_root(&self) -> reqwest::Response {
        reqwest::Client::new()
            .get(&format!("{}/", self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.clear_secret();
    }
}
