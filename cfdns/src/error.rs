//! Unified error type definition

use std::path::PathBuf;

use thiserror::Error;

pub use cfdns_provider::ProviderError;

/// Top-level error for one CLI invocation.
///
/// Every variant is fatal: `main` prints it and exits with status 1.
#[derive(Error, Debug)]
pub enum AppError {
    /// Config file missing, unreadable, or lacking a required key
    #[error("Configuration error ({}): {detail}", .path.display())]
    Configuration { path: PathBuf, detail: String },

    /// Command line does not match the grammar; carries the rendered usage text
    #[error("{0}")]
    Usage(String),

    /// The configured domain has no zone at the provider
    #[error("Zone not found for domain '{domain}'")]
    ZoneNotFound { domain: String },

    /// Provider error (converting from library)
    #[error("Cloudflare: {0}")]
    Provider(#[from] ProviderError),

    /// Writing command output failed
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

impl AppError {
    pub(crate) fn configuration(path: impl Into<PathBuf>, detail: impl Into<String>) -> Self {
        Self::Configuration {
            path: path.into(),
            detail: detail.into(),
        }
    }
}

/// CLI Result type alias
pub type AppResult<T> = std::result::Result<T, AppError>;
