//! Main REST client implementation
//!
//! Every Prime endpoint is authenticated, so the client always carries
//! credentials. The executor in [`PrimeClient::send`] is the single place
//! requests are serialized, signed, issued, and classified; endpoint
//! wrappers are thin glue over it.

use crate::endpoints::{
    ActivityEndpoints, OrderEndpoints, PortfolioEndpoints, ProductEndpoints, TransactionEndpoints,
};
use crate::error::{RestError, RestResult};
use crate::pagination::PaginationConfig;
use prime_auth::{unix_timestamp, Credentials};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Production Prime API base URL
const DEFAULT_BASE_URL: &str = "https://api.prime.coinbase.com";

const ACCESS_KEY_HEADER: &str = "X-CB-ACCESS-KEY";
const PASSPHRASE_HEADER: &str = "X-CB-ACCESS-PASSPHRASE";
const SIGNATURE_HEADER: &str = "X-CB-ACCESS-SIGNATURE";
const TIMESTAMP_HEADER: &str = "X-CB-ACCESS-TIMESTAMP";

/// Coinbase Prime REST API client
///
/// Stateless across calls: concurrent requests from multiple tasks are
/// safe as long as each call supplies its own request/response values.
///
/// # Example
///
/// ```no_run
/// use prime_rest::PrimeClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = PrimeClient::from_env()?;
///     let portfolios = client.portfolios().list_portfolios().await?;
///     println!("{} portfolios", portfolios.portfolios.len());
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct PrimeClient {
    http_client: Client,
    credentials: Credentials,
    base_url: String,
    pagination: PaginationConfig,
}

impl PrimeClient {
    /// Create a new client with credentials and default configuration
    pub fn new(credentials: Credentials) -> Self {
        Self::with_config(ClientConfig::new(credentials))
    }

    /// Create a client from the `PRIME_CREDENTIALS` environment variable
    pub fn from_env() -> RestResult<Self> {
        Ok(Self::new(Credentials::from_env()?))
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let user_agent = config
            .user_agent
            .unwrap_or_else(|| format!("prime-rest/{}", env!("CARGO_PKG_VERSION")));

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(user_agent)
            .build()
            .expect("Failed to create HTTP client");

        info!("Created Prime REST client");

        Self {
            http_client,
            credentials: config.credentials,
            base_url: config.base_url,
            pagination: config.pagination,
        }
    }

    /// The credentials this client signs with
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Pagination bounds applied to pagers created by this client
    pub fn pagination_config(&self) -> &PaginationConfig {
        &self.pagination
    }

    // ========================================================================
    // Endpoint groups
    // ========================================================================

    /// Portfolio endpoints
    pub fn portfolios(&self) -> PortfolioEndpoints<'_> {
        PortfolioEndpoints::new(self)
    }

    /// Order endpoints
    pub fn orders(&self) -> OrderEndpoints<'_> {
        OrderEndpoints::new(self)
    }

    /// Product endpoints
    pub fn products(&self) -> ProductEndpoints<'_> {
        ProductEndpoints::new(self)
    }

    /// Transaction endpoints
    pub fn transactions(&self) -> TransactionEndpoints<'_> {
        TransactionEndpoints::new(self)
    }

    /// Activity endpoints
    pub fn activities(&self) -> ActivityEndpoints<'_> {
        ActivityEndpoints::new(self)
    }

    // ========================================================================
    // Request executor
    // ========================================================================

    /// Build, sign, issue, and classify one request
    ///
    /// The signature covers the path without the query string. The body is
    /// read fully into memory before decoding; Prime responses are small
    /// JSON documents. Cancellation is the caller's: dropping the returned
    /// future aborts the in-flight call, and the client-level timeout
    /// bounds it otherwise. No retries are performed at this layer.
    pub(crate) async fn send<B, T>(
        &self,
        method: Method,
        path: &str,
        query: &str,
        expected: &[StatusCode],
        body: Option<&B>,
    ) -> RestResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body_bytes = match body {
            Some(body) => serde_json::to_vec(body)?,
            None => Vec::new(),
        };

        let timestamp = unix_timestamp();
        let signature = self
            .credentials
            .sign(timestamp, method.as_str(), path, &body_bytes);
        let url = format!("{}{}{}", self.base_url, path, query);

        debug!(%method, path, "issuing signed request");

        let mut request = self
            .http_client
            .request(method, &url)
            .header(ACCEPT, "application/json")
            .header(ACCESS_KEY_HEADER, self.credentials.access_key())
            .header(PASSPHRASE_HEADER, self.credentials.passphrase())
            .header(SIGNATURE_HEADER, signature)
            .header(TIMESTAMP_HEADER, timestamp.to_string());

        if !body_bytes.is_empty() {
            request = request
                .header(CONTENT_TYPE, "application/json")
                .body(body_bytes);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        check_status(status, expected, &url, &bytes)?;

        serde_json::from_slice(&bytes).map_err(|source| RestError::Decode { url, source })
    }
}

impl std::fmt::Debug for PrimeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrimeClient")
            .field("base_url", &self.base_url)
            .field("pagination", &self.pagination)
            .finish()
    }
}

/// Classify a status code against the caller's expected set
///
/// A status outside the set is an API error even when the body would
/// decode as the target response shape.
pub(crate) fn check_status(
    status: StatusCode,
    expected: &[StatusCode],
    url: &str,
    body: &[u8],
) -> RestResult<()> {
    if expected.contains(&status) {
        return Ok(());
    }
    Err(RestError::Api {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or("unknown").to_string(),
        url: url.to_string(),
        message: extract_error_message(body),
    })
}

/// Pull the primary error text out of an error body
///
/// Prefers the JSON `message` field, falls back to the raw body text.
pub(crate) fn extract_error_message(body: &[u8]) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }

    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(parsed) => parsed.message,
        Err(_) => String::from_utf8_lossy(body).into_owned(),
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials
    pub credentials: Credentials,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
    /// API base URL
    pub base_url: String,
    /// Pagination bounds for pagers this client creates
    pub pagination: PaginationConfig,
}

impl ClientConfig {
    /// Create a configuration with defaults
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            pagination: PaginationConfig::default(),
        }
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set base URL (sandbox, mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set pagination bounds
    pub fn with_pagination(mut self, pagination: PaginationConfig) -> Self {
        self.pagination = pagination;
        self
    }
}
