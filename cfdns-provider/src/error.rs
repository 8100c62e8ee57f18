use thiserror::Error;

/// Errors returned by [`DnsProvider`](crate::DnsProvider) operations.
///
/// API failures are classified by Cloudflare error code where the code has a
/// clear meaning; anything else surfaces as [`ProviderError::Api`] with the raw
/// code and message. Nothing here is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// Connection failure, unreadable body, or a 502/503/504 from the edge.
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    /// HTTP 429. `retry_after` comes from the `Retry-After` header.
    #[error("rate limited{}", retry_hint(.retry_after))]
    RateLimited {
        retry_after: Option<u64>,
        message: Option<String>,
    },

    /// The token is missing, malformed, revoked or expired.
    #[error("invalid credentials{}", suffix(.message))]
    InvalidCredentials { message: Option<String> },

    /// The token is valid but lacks the DNS edit/read permission for this zone.
    #[error("permission denied{}", suffix(.message))]
    PermissionDenied { message: Option<String> },

    /// A record field was rejected. `param` names the field (`name`, `content`,
    /// `ttl`, `proxied`) or is `record` when the API does not say which.
    #[error("invalid {param}: {message}")]
    InvalidParameter { param: &'static str, message: String },

    #[error("record '{name}' already exists: {message}")]
    RecordExists { name: String, message: String },

    #[error("record '{record_id}' not found: {message}")]
    RecordNotFound { record_id: String, message: String },

    #[error("record quota exceeded: {0}")]
    QuotaExceeded(String),

    /// The zone id in the request path does not route to a zone.
    #[error("zone '{zone}' not found: {message}")]
    ZoneNotFound { zone: String, message: String },

    /// The response was not the JSON the API documents.
    #[error("unexpected response: {0}")]
    Parse(String),

    /// The HTTP client could not be constructed (TLS backend, proxy settings).
    #[error("cannot build HTTP client: {0}")]
    Client(String),

    /// An API error with no more specific variant.
    #[error("API error{}: {message}", code_hint(.code))]
    Api { code: Option<i32>, message: String },
}

fn suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}

fn retry_hint(retry_after: &Option<u64>) -> String {
    retry_after
        .map(|secs| format!(" (retry after {secs}s)"))
        .unwrap_or_default()
}

fn code_hint(code: &Option<i32>) -> String {
    code.map(|c| format!(" {c}")).unwrap_or_default()
}

/// `Result` alias used across this crate.
pub type Result<T> = std::result::Result<T, ProviderError>;
