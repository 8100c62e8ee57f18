//! # cfdns-provider
//!
//! A small client for the Cloudflare v4 DNS record API, shaped around a
//! [`DnsProvider`] trait so callers can substitute their own transport.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: the platform's native TLS implementation.
//! - **`rustls`**: rustls, for static and cross-compiled builds.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cfdns_provider::{CloudflareProvider, DnsProvider, RecordQueryParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = CloudflareProvider::new("your-token".to_string())?;
//!
//!     let zones = provider.find_zones("example.com").await?;
//!     let Some(zone) = zones.first() else {
//!         return Ok(());
//!     };
//!
//!     let page = provider
//!         .list_records(&zone.id, &RecordQueryParams::for_name("www.example.com"))
//!         .await?;
//!     for record in &page.items {
//!         println!("{} {} {}", record.name, record.record_type, record.content);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! Failures come back as [`ProviderError`], classified by Cloudflare error code
//! where possible. Requests are never retried.

mod cloudflare;
mod error;
mod names;
mod provider;
mod types;

pub mod log_sanitizer;

pub use cloudflare::CloudflareProvider;
pub use error::{ProviderError, Result};
pub use names::{normalize_domain_name, qualify_name};
pub use provider::DnsProvider;
pub use types::{DnsRecord, PaginatedResponse, RecordQueryParams, RecordRequest, Zone};
