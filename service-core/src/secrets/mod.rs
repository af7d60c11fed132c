//! Secret probing: resolve a secret from its source, hash it, and report
//! whether it was found.
//!
//! Resolution never exposes the raw value. A missing source resolves to
//! [`SENTINEL`], which is hashed like any other value so the response always
//! carries a digest.

mod digest;
mod probe;
mod source;

pub use digest::sha256_hex;
pub use probe::{SecretProbe, SecretProbeResult};
pub use source::{ResolvedSecret, SENTINEL, SecretError, SecretSource};
