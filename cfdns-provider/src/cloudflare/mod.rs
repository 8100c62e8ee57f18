//! Cloudflare DNS Provider

mod dns;
mod error;
mod http;
mod types;

use std::time::Duration;

use reqwest::Client;

use crate::error::{ProviderError, Result};
use crate::log_sanitizer::mask_secret;

const CF_API_BASE: &str = "https://api.cloudflare.com/client/v4";
/// Cloudflare Zones API 单页最大记录数
const MAX_PAGE_SIZE_ZONES: u32 = 50;
/// Cloudflare DNS Records API 单页最大记录数
const MAX_PAGE_SIZE_RECORDS: u32 = 100;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Cloudflare v4 API client authenticated with an API token.
pub struct CloudflareProvider {
    client: Client,
    api_token: String,
    base_url: String,
}

impl CloudflareProvider {
    /// Provider talking to the public Cloudflare v4 API.
    pub fn new(api_token: String) -> Result<Self> {
        Self::with_base_url(api_token, CF_API_BASE)
    }

    /// Provider talking to another endpoint speaking the v4 API (proxies, test servers).
    pub fn with_base_url(api_token: String, base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("cfdns/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProviderError::Client(e.to_string()))?;

        Ok(Self {
            client,
            api_token,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

impl std::fmt::Debug for CloudflareProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudflareProvider")
            .field("base_url", &self.base_url)
            .field("api_token", &mask_secret(&self.api_token))
            .finish_non_exhaustive()
    }
}
