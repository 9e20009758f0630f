//! Error types for REST API operations

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Transport-level failure (DNS, connection, timeout, cancellation)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a status code outside the expected set
    #[error("API error: {status} {status_text} for {url}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Canonical status text
        status_text: String,
        /// Full request URL
        url: String,
        /// Best-effort message extracted from the error body
        message: String,
    },

    /// Response body did not parse as the expected JSON shape
    #[error("Decode error for {url}: {source}")]
    Decode {
        /// Full request URL
        url: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Request body failed to serialize
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Credential loading failed
    #[error(transparent)]
    Auth(#[from] prime_auth::AuthError),
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_carries_context() {
        let err = RestError::Api {
            status: 404,
            status_text: "Not Found".to_string(),
            url: "https://api.prime.coinbase.com/v1/portfolios/x".to_string(),
            message: "portfolio not found".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("404"));
        assert!(text.contains("Not Found"));
        assert!(text.contains("/v1/portfolios/x"));
        assert!(text.contains("portfolio not found"));
    }
}
