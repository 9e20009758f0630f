//! Error types for credential handling

/// Errors that can occur while loading credentials
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    /// Credentials blob failed to parse
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),
}

/// Result type for credential operations
pub type AuthResult<T> = Result<T, AuthError>;
