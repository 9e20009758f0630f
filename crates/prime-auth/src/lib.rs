//! Credentials and request signing for the Coinbase Prime API
//!
//! This crate holds the API credential material and implements the
//! HMAC-SHA256 request signature Prime requires on every call.
//!
//! # Example
//!
//! ```no_run
//! use prime_auth::{unix_timestamp, Credentials};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load credentials from the PRIME_CREDENTIALS environment variable
//!     let creds = Credentials::from_env()?;
//!
//!     // Sign a request
//!     let timestamp = unix_timestamp();
//!     let signature = creds.sign(timestamp, "GET", "/v1/portfolios", b"");
//!     println!("Signature: {}", signature);
//!
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;

pub use credentials::{unix_timestamp, Credentials, CREDENTIALS_ENV_VAR};
pub use error::{AuthError, AuthResult};
