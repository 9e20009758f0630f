//! Authentication credentials for the Coinbase Prime API
//!
//! Implements HMAC-SHA256 signing as required by Prime's authenticated
//! endpoints.
//!
//! # Security
//!
//! The signing key and passphrase are stored using the `secrecy` crate which:
//! - Zeroizes memory on drop (prevents memory scanning)
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// Environment variable holding the JSON credentials blob
pub const CREDENTIALS_ENV_VAR: &str = "PRIME_CREDENTIALS";

/// API credentials for authenticated requests
///
/// The signing key and passphrase are automatically zeroized when the
/// Credentials are dropped, preventing sensitive data from remaining in
/// memory.
pub struct Credentials {
    /// API access key (sent in the clear as a header)
    access_key: String,
    /// API passphrase (sent as a header, zeroized on drop)
    passphrase: SecretString,
    /// HMAC signing key (never leaves the process, zeroized on drop)
    signing_key: SecretString,
    /// Default portfolio for calls that don't name one
    portfolio_id: String,
}

/// Shape of the JSON blob in `PRIME_CREDENTIALS`
#[derive(Deserialize)]
struct CredentialsBlob {
    #[serde(rename = "accessKey")]
    access_key: String,
    passphrase: SecretString,
    #[serde(rename = "signingKey")]
    signing_key: SecretString,
    #[serde(rename = "portfolioId", default)]
    portfolio_id: String,
}

impl Credentials {
    /// Create new credentials from their raw parts
    pub fn new(
        access_key: impl Into<String>,
        passphrase: impl Into<String>,
        signing_key: impl Into<String>,
        portfolio_id: impl Into<String>,
    ) -> Self {
        Self {
            access_key: access_key.into(),
            passphrase: SecretString::from(passphrase.into()),
            signing_key: SecretString::from(signing_key.into()),
            portfolio_id: portfolio_id.into(),
        }
    }

    /// Load credentials from the environment
    ///
    /// Reads the `PRIME_CREDENTIALS` variable, which holds a JSON blob:
    ///
    /// ```json
    /// {"accessKey":"...","passphrase":"...","signingKey":"...","portfolioId":"..."}
    /// ```
    pub fn from_env() -> AuthResult<Self> {
        let blob = std::env::var(CREDENTIALS_ENV_VAR)
            .map_err(|_| AuthError::EnvVarNotSet(CREDENTIALS_ENV_VAR.to_string()))?;
        Self::from_json(&blob)
    }

    /// Parse credentials from a JSON blob
    pub fn from_json(blob: &str) -> AuthResult<Self> {
        let parsed: CredentialsBlob = serde_json::from_str(blob)
            .map_err(|e| AuthError::InvalidCredentials(e.to_string()))?;

        debug!("Loaded Prime credentials");

        Ok(Self {
            access_key: parsed.access_key,
            passphrase: parsed.passphrase,
            signing_key: parsed.signing_key,
            portfolio_id: parsed.portfolio_id,
        })
    }

    /// Get the API access key
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// Get the passphrase for the `X-CB-ACCESS-PASSPHRASE` header
    pub fn passphrase(&self) -> &str {
        self.passphrase.expose_secret()
    }

    /// Get the default portfolio id
    pub fn portfolio_id(&self) -> &str {
        &self.portfolio_id
    }

    /// Sign a request for the Prime API
    ///
    /// The canonical signing string is the concatenation
    /// `timestamp + method + path + body` with no separators; the server
    /// recomputes the same string and rejects mismatches. The path excludes
    /// the query string.
    ///
    /// # Arguments
    /// * `timestamp` - Unix seconds at the moment of signing
    /// * `method` - HTTP method (e.g., "GET", "POST")
    /// * `path` - Canonical request path (e.g., "/v1/portfolios")
    /// * `body` - Serialized JSON body, empty for bodyless requests
    ///
    /// # Returns
    /// Base64-encoded HMAC-SHA256 signature
    pub fn sign(&self, timestamp: u64, method: &str, path: &str, body: &[u8]) -> String {
        // Keyed by the raw signing key bytes, not a decoded form
        let mut mac = HmacSha256::new_from_slice(self.signing_key.expose_secret().as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(timestamp.to_string().as_bytes());
        mac.update(method.as_bytes());
        mac.update(path.as_bytes());
        mac.update(body);

        BASE64.encode(mac.finalize().into_bytes())
    }
}

impl Clone for Credentials {
    /// Clone credentials (creates new secret boxes with the same content)
    fn clone(&self) -> Self {
        Self {
            access_key: self.access_key.clone(),
            passphrase: SecretString::from(self.passphrase.expose_secret().to_owned()),
            signing_key: SecretString::from(self.signing_key.expose_secret().to_owned()),
            portfolio_id: self.portfolio_id.clone(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field(
                "access_key",
                &format!("{}...", &self.access_key[..8.min(self.access_key.len())]),
            )
            .field("passphrase", &"[REDACTED]")
            .field("signing_key", &"[REDACTED]")
            .field("portfolio_id", &self.portfolio_id)
            .finish()
    }
}

/// Current time as integer Unix seconds
///
/// Formatted with `to_string` this yields the base-10 timestamp the
/// signature and the `X-CB-ACCESS-TIMESTAMP` header both carry.
pub fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_credentials() -> Credentials {
        Credentials::new("test-access-key", "test-passphrase", "test-signing-key", "pf-1")
    }

    #[test]
    fn test_signature_is_deterministic() {
        let creds = test_credentials();
        let a = creds.sign(1_700_000_000, "GET", "/v1/portfolios", b"");
        let b = creds.sign(1_700_000_000, "GET", "/v1/portfolios", b"");
        assert_eq!(a, b);
    }

    #[test]
    fn test_signature_changes_with_each_input() {
        let creds = test_credentials();
        let base = creds.sign(1_700_000_000, "GET", "/v1/portfolios", b"");

        assert_ne!(base, creds.sign(1_700_000_001, "GET", "/v1/portfolios", b""));
        assert_ne!(base, creds.sign(1_700_000_000, "POST", "/v1/portfolios", b""));
        assert_ne!(base, creds.sign(1_700_000_000, "GET", "/v1/orders", b""));
        assert_ne!(base, creds.sign(1_700_000_000, "GET", "/v1/portfolios", b"{}"));

        let other_key = Credentials::new("test-access-key", "test-passphrase", "other", "pf-1");
        assert_ne!(base, other_key.sign(1_700_000_000, "GET", "/v1/portfolios", b""));
    }

    #[test]
    fn test_canonical_string_concatenation_order() {
        // The canonical string is timestamp || method || path || body,
        // with the timestamp in base-10 and no separators anywhere.
        let creds = test_credentials();
        let signature = creds.sign(1_700_000_000, "POST", "/v1/portfolios/pf-1/order", b"{\"x\":1}");

        let mut mac = HmacSha256::new_from_slice(b"test-signing-key").unwrap();
        mac.update(b"1700000000POST/v1/portfolios/pf-1/order{\"x\":1}");
        let expected = BASE64.encode(mac.finalize().into_bytes());

        assert_eq!(signature, expected);
    }

    #[test]
    fn test_signature_shape() {
        // HMAC-SHA256 output is 32 bytes, so the base64 form is always
        // 44 characters ending in '='.
        let creds = test_credentials();
        let signature = creds.sign(1_700_000_000, "GET", "/v1/portfolios", b"");
        assert_eq!(signature.len(), 44);
        assert!(signature.ends_with('='));
    }

    #[test]
    fn test_empty_secret_still_signs() {
        // Garbage-in, garbage-out: the server rejects it, we don't.
        let creds = Credentials::new("key", "pass", "", "pf-1");
        let signature = creds.sign(1_700_000_000, "GET", "/v1/portfolios", b"");
        assert_eq!(signature.len(), 44);
    }

    #[test]
    fn test_from_json() {
        let blob = r#"{
            "accessKey": "ak",
            "passphrase": "pp",
            "signingKey": "sk",
            "portfolioId": "pf-9"
        }"#;
        let creds = Credentials::from_json(blob).unwrap();
        assert_eq!(creds.access_key(), "ak");
        assert_eq!(creds.passphrase(), "pp");
        assert_eq!(creds.portfolio_id(), "pf-9");
    }

    #[test]
    fn test_from_json_missing_portfolio_defaults_empty() {
        let blob = r#"{"accessKey":"ak","passphrase":"pp","signingKey":"sk"}"#;
        let creds = Credentials::from_json(blob).unwrap();
        assert_eq!(creds.portfolio_id(), "");
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = Credentials::from_json("not json").unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials(_)));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let creds = Credentials::new("test-access-key", "hunter2", "super-secret", "pf-1");
        let output = format!("{:?}", creds);
        assert!(!output.contains("hunter2"));
        assert!(!output.contains("super-secret"));
        assert!(output.contains("[REDACTED]"));
    }
}
