use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::models::{
    DataEnvelope, DataPage, ErrorEnvelope, MetadataEnvelope, QueryResult, RouteMetadata, RoutePath,
};
use crate::query::QueryRequest;

/// Base endpoint for the EIA v2 API.
pub const EIA_API_BASE: &str = "https://api.eia.gov/v2";

/// Configuration for the EIA API client
#[derive(Clone)]
pub struct Configuration {
    /// Base URL for the EIA v2 API (e.g. "https://api.eia.gov/v2")
    pub base_path: String,
    /// API key sent with every request. Obtaining one is free; requests
    /// without a key are rejected by the remote.
    pub api_key: String,
    /// User agent string for HTTP requests
    pub user_agent: Option<String>,
    /// HTTP client instance
    pub client: reqwest::Client,
    /// Largest page the remote will serve per request
    pub max_page_length: u64,
    /// Hard cap on rows assembled across pages for a single query.
    /// Hitting the cap yields a partial result with `complete = false`.
    pub max_total_rows: u64,
    /// Attempts per page before a retryable failure aborts the fetch
    pub max_attempts: u32,
    /// Base delay for exponential backoff between attempts
    pub retry_base_delay: Duration,
    /// Timeout applied to each individual request
    pub request_timeout: Duration,
}

impl Configuration {
    /// Create a configuration with the given API key and default limits.
    pub fn new<S: Into<String>>(api_key: S) -> Configuration {
        Configuration {
            api_key: api_key.into(),
            ..Configuration::default()
        }
    }
}

impl std::fmt::Debug for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The key is redacted so configs can be logged safely.
        f.debug_struct("Configuration")
            .field("base_path", &self.base_path)
            .field("api_key", &"***")
            .field("user_agent", &self.user_agent)
            .field("max_page_length", &self.max_page_length)
            .field("max_total_rows", &self.max_total_rows)
            .field("max_attempts", &self.max_attempts)
            .field("retry_base_delay", &self.retry_base_delay)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            base_path: EIA_API_BASE.to_owned(),
            api_key: String::new(),
            user_agent: Some("eia-rs/0.1".to_owned()),
            client: reqwest::Client::new(),
            max_page_length: 5000,
            max_total_rows: 50_000,
            max_attempts: 3,
            retry_base_delay: Duration::from_millis(250),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Classification of a remote failure, stable across routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// 4xx other than 429: malformed facet, unknown column, missing key.
    /// Retrying cannot help.
    ClientError,
    /// 429: the remote asked us to slow down.
    RateLimited,
    /// 5xx: the remote is unhealthy.
    ServerError,
    /// Network-level failure: timeout, connection reset, DNS.
    Transport,
}

impl ApiErrorKind {
    pub fn retryable(&self) -> bool {
        match self {
            ApiErrorKind::ClientError => false,
            ApiErrorKind::RateLimited | ApiErrorKind::ServerError | ApiErrorKind::Transport => true,
        }
    }
}

/// Errors that can occur when talking to the EIA API
#[derive(Debug, Error)]
pub enum EiaApiError {
    /// Network, timeout, or other request-level errors
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote returned a body that does not match the v2 envelope
    #[error("failed to parse EIA response: {0}")]
    Parse(#[from] serde_json::Error),

    /// The remote returned a non-success status with an error body
    #[error("EIA API error ({status}): {message}")]
    Api {
        kind: ApiErrorKind,
        /// HTTP status code from the remote
        status: u16,
        /// Human-readable message from the remote error envelope
        message: String,
    },
}

impl EiaApiError {
    pub fn kind(&self) -> ApiErrorKind {
        match self {
            EiaApiError::Transport(_) => ApiErrorKind::Transport,
            EiaApiError::Parse(_) => ApiErrorKind::ClientError,
            EiaApiError::Api { kind, .. } => *kind,
        }
    }

    pub fn retryable(&self) -> bool {
        self.kind().retryable()
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            EiaApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Pagination progresses through explicit states so the cap and
/// partial-result semantics are checkable without a live remote.
#[derive(Debug)]
enum FetchState {
    Fetching { offset: u64 },
    Complete,
    Capped,
}

/// # EIA API Client
///
/// Async client for the EIA v2 REST API. Handles query serialization,
/// pagination, bounded retries, and response normalization; route
/// validation lives a layer up, in the `eia` crate.
///
/// ## Usage
///
/// ```rust,no_run
/// use eia_api::{Configuration, EiaApiClient, QueryRequest, RoutePath};
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Arc::new(Configuration::new("your-api-key"));
///     let client = EiaApiClient::new(config);
///
///     let mut request = QueryRequest::new(RoutePath::from("electricity/retail-sales"));
///     request.data_columns = vec!["sales".to_string(), "price".to_string()];
///     request
///         .facets
///         .insert("stateid".to_string(), vec!["CA".to_string()]);
///
///     let result = client.fetch_all(&request).await?;
///     println!("{} of {} rows (complete: {})",
///         result.records.len(), result.total, result.complete);
///     Ok(())
/// }
/// ```
pub struct EiaApiClient {
    configuration: Arc<Configuration>,
}

impl std::fmt::Debug for EiaApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Deliberately omits the configuration so the key never lands in logs.
        f.debug_struct("EiaApiClient")
            .field("base_path", &self.configuration.base_path)
            .finish()
    }
}

impl EiaApiClient {
    /// Create a new EIA API client instance
    pub fn new(configuration: Arc<Configuration>) -> Self {
        Self { configuration }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Fetch the complete result set for a query.
    ///
    /// Issues the first page, reads the remote-reported total, then
    /// advances the offset page by page until every row is retrieved or
    /// the row cap is hit. A capped fetch returns the rows gathered so far
    /// with `complete = false` rather than failing.
    ///
    /// Each page request applies the configured retry policy for
    /// retryable failures (429, 5xx, transport). A page that exhausts its
    /// retries aborts the whole fetch with that error; rows from earlier
    /// pages are discarded so a failure is never misreported as a
    /// complete result. Page requests within one call are sequential;
    /// separate calls are free to run concurrently.
    pub async fn fetch_all(&self, request: &QueryRequest) -> Result<QueryResult, EiaApiError> {
        let config = &self.configuration;
        let row_cap = request
            .max_rows
            .map(|n| n.min(config.max_total_rows))
            .unwrap_or(config.max_total_rows);

        let mut records = Vec::new();
        let mut total: u64 = 0;
        let mut state = FetchState::Fetching {
            offset: request.offset,
        };

        loop {
            let offset = match state {
                FetchState::Fetching { offset } => offset,
                FetchState::Complete | FetchState::Capped => break,
            };

            let remaining = row_cap.saturating_sub(records.len() as u64);
            let page_length = request
                .length
                .min(config.max_page_length)
                .min(remaining)
                .max(1);

            let page = self.fetch_page_with_retry(request, offset, page_length).await?;
            let fetched = page.data.len() as u64;
            records.extend(page.data);

            total = page.total.unwrap_or(records.len() as u64);

            state = if (records.len() as u64) >= total {
                FetchState::Complete
            } else if (records.len() as u64) >= row_cap {
                FetchState::Capped
            } else if fetched == 0 {
                // Remote reported more rows than it is willing to serve;
                // stop rather than loop on empty pages.
                FetchState::Capped
            } else {
                FetchState::Fetching {
                    offset: offset + fetched,
                }
            };
        }

        let complete = records.len() as u64 == total;
        Ok(QueryResult {
            records,
            total,
            complete,
        })
    }

    /// Fetch route metadata: child routes, facets, and supported
    /// frequencies. This is a call to the bare route path, without the
    /// `/data/` suffix, and never returns data rows.
    pub async fn route_metadata(&self, path: &RoutePath) -> Result<RouteMetadata, EiaApiError> {
        let url = self.metadata_url(path);
        let pairs = vec![("api_key".to_string(), self.configuration.api_key.clone())];
        let body = self.get_with_retry(&url, &pairs).await?;
        let envelope: MetadataEnvelope = serde_json::from_str(&body)?;
        Ok(envelope.response)
    }

    async fn fetch_page_with_retry(
        &self,
        request: &QueryRequest,
        offset: u64,
        length: u64,
    ) -> Result<DataPage, EiaApiError> {
        let url = self.data_url(&request.route);
        let pairs = request.to_query_pairs_at(&self.configuration.api_key, offset, length);
        let body = self.get_with_retry(&url, &pairs).await?;
        let envelope: DataEnvelope = serde_json::from_str(&body)?;
        Ok(envelope.response)
    }

    /// One GET with bounded exponential backoff. Only retryable failures
    /// are retried; the last error is surfaced verbatim once attempts run
    /// out.
    async fn get_with_retry(
        &self,
        url: &str,
        pairs: &[(String, String)],
    ) -> Result<String, EiaApiError> {
        let config = &self.configuration;
        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            match self.get_once(url, pairs).await {
                Ok(body) => return Ok(body),
                Err(err) if err.retryable() && attempt < config.max_attempts => {
                    let delay = config.retry_base_delay * 2u32.saturating_pow(attempt - 1);
                    tokio::time::sleep(delay).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn get_once(&self, url: &str, pairs: &[(String, String)]) -> Result<String, EiaApiError> {
        let mut builder = self
            .configuration
            .client
            .get(url)
            .query(pairs)
            .timeout(self.configuration.request_timeout);

        if let Some(user_agent) = &self.configuration.user_agent {
            builder = builder.header(reqwest::header::USER_AGENT, user_agent);
        }

        let response = builder.send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.text().await?)
        } else {
            let status = status.as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            // The remote wraps failures as {"error": "...", "code": ...};
            // fall back to the raw body when it does not.
            let message = serde_json::from_str::<ErrorEnvelope>(&body)
                .ok()
                .and_then(|envelope| envelope.error)
                .unwrap_or(body);
            let kind = match status {
                429 => ApiErrorKind::RateLimited,
                400..=499 => ApiErrorKind::ClientError,
                _ => ApiErrorKind::ServerError,
            };
            Err(EiaApiError::Api {
                kind,
                status,
                message,
            })
        }
    }

    fn data_url(&self, route: &RoutePath) -> String {
        format!("{}/{}/data/", self.configuration.base_path, route)
    }

    fn metadata_url(&self, path: &RoutePath) -> String {
        if path.is_root() {
            format!("{}/", self.configuration.base_path)
        } else {
            format!("{}/{}/", self.configuration.base_path, path)
        }
    }
}
