use secrecy::{ExposeSecret, Secret};
use std::env::VarError;
use std::fmt;
use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use super::digest::sha256_hex;

/// Value substituted when the secret source does not exist.
pub const SENTINEL: &str = "missing";

/// Failures that are not recovered by substituting the sentinel.
#[derive(Debug, Error)]
pub enum SecretError {
    #[error("failed to read secret file {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("environment variable {var} is not valid unicode")]
    NotUnicode { var: String },
}

/// Strips surrounding Unicode whitespace and ASCII information separators
/// (U+001C..=U+001F).
fn trim_secret(contents: &str) -> &str {
    contents.trim_matches(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
}

/// Where a service reads its secret from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretSource {
    /// A mounted file; surrounding whitespace is trimmed.
    File { path: PathBuf },
    /// A process environment variable, read verbatim.
    Env { var: String },
}

impl SecretSource {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        SecretSource::File { path: path.into() }
    }

    pub fn env(var: impl Into<String>) -> Self {
        SecretSource::Env { var: var.into() }
    }

    /// Reads the raw secret. `Ok(None)` means the source does not exist;
    /// every other failure is returned as an error.
    pub async fn read(&self) -> Result<Option<String>, SecretError> {
        match self {
            SecretSource::File { path } => match tokio::fs::read_to_string(path).await {
                Ok(contents) => Ok(Some(trim_secret(&contents).to_string())),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                Err(source) => Err(SecretError::Unreadable {
                    path: path.clone(),
                    source,
                }),
            },
            SecretSource::Env { var } => match std::env::var(var) {
                Ok(value) => Ok(Some(value)),
                Err(VarError::NotPresent) => Ok(None),
                Err(VarError::NotUnicode(_)) => Err(SecretError::NotUnicode { var: var.clone() }),
            },
        }
    }

    /// Reads the secret, substituting [`SENTINEL`] when the source is missing.
    pub async fn resolve(&self) -> Result<ResolvedSecret, SecretError> {
        let value = self.read().await?.unwrap_or_else(|| {
            tracing::debug!(source = %self, "Secret source not found, using sentinel");
            SENTINEL.to_string()
        });
        Ok(ResolvedSecret::new(value))
    }
}

impl fmt::Display for SecretSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecretSource::File { path } => write!(f, "file:{}", path.display()),
            SecretSource::Env { var } => write!(f, "env:{}", var),
        }
    }
}

/// A resolved secret (real value or sentinel). `Debug` output is redacted.
#[derive(Debug)]
pub struct ResolvedSecret(Secret<String>);

impl ResolvedSecret {
    pub fn new(value: String) -> Self {
        Self(Secret::new(value))
    }

    /// True unless the value equals the sentinel. A real secret whose text is
    /// literally `missing` is reported as absent.
    pub fn is_present(&self) -> bool {
        self.0.expose_secret() != SENTINEL
    }

    pub fn sha256_hex(&self) -> String {
        sha256_hex(self.0.expose_secret())
    }
}
