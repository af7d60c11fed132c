use serde::Serialize;

use super::source::{SecretError, SecretSource};

/// Response body of the secret-status endpoint. Built per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecretProbeResult {
    pub service: String,
    pub secret_present: bool,
    pub secret_sha256: String,
}

/// A service's immutable probe configuration: its name and its secret source.
#[derive(Debug, Clone)]
pub struct SecretProbe {
    service: &'static str,
    source: SecretSource,
}

impl SecretProbe {
    pub fn new(service: &'static str, source: SecretSource) -> Self {
        Self { service, source }
    }

    pub fn service(&self) -> &'static str {
        self.service
    }

    pub fn source(&self) -> &SecretSource {
        &self.source
    }

    /// Resolves the secret and reports its presence and digest.
    ///
    /// Only a missing source is recovered (as the sentinel); any other read
    /// failure is returned to the caller.
    #[tracing::instrument(skip(self), fields(service = self.service, source = %self.source))]
    pub async fn probe(&self) -> Result<SecretProbeResult, SecretError> {
        let secret = self.source.resolve().await?;
        let secret_present = secret.is_present();

        metrics::counter!(
            "secret_probe_total",
            "service" => self.service,
            "present" => secret_present.to_string()
        )
        .increment(1);

        Ok(SecretProbeResult {
            service: self.service.to_string(),
            secret_present,
            secret_sha256: secret.sha256_hex(),
        })
    }
}
