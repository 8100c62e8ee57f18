//! # cfdns
//!
//! Manage the DNS records of one Cloudflare zone from the command line.
//!
//! One invocation runs one command:
//!
//! 1. parse arguments (help/version stop here)
//! 2. load `~/.config/cloudflare/config.ini`
//! 3. resolve the configured domain to a zone
//! 4. run `get`, `update` or `delete` against that zone
//!
//! Only `get` writes to stdout. Logs go to stderr.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod output;

#[cfg(test)]
mod test_utils;

use std::io::Write;
use std::sync::Arc;

use cfdns_provider::CloudflareProvider;

pub use cli::{Command, Invocation, parse_args};
pub use client::{UpsertOutcome, ZoneClient};
pub use config::{Config, default_config_path};
pub use error::{AppError, AppResult};
pub use output::OutputFormat;

/// Run a parsed invocation against Cloudflare, writing `get` output to `out`.
pub async fn run(invocation: Invocation, out: &mut dyn Write) -> AppResult<()> {
    if let Command::Help(text) | Command::Version(text) = &invocation.command {
        write!(out, "{text}")?;
        return Ok(());
    }

    let path = match invocation.config_path {
        Some(path) => path,
        None => default_config_path()?,
    };
    let config = Config::load(&path)?;

    let provider = Arc::new(CloudflareProvider::new(config.token.clone())?);
    tracing::debug!("Using {provider:?}");
    let client = ZoneClient::resolve(provider, &config.domain).await?;

    execute(&client, invocation.command, out).await
}

/// Run one command against an already resolved zone.
pub async fn execute(client: &ZoneClient, command: Command, out: &mut dyn Write) -> AppResult<()> {
    match command {
        Command::Get { name, format } => {
            let records = match name {
                Some(name) => client.get_records(&name).await?,
                None => client.list_records().await?,
            };
            output::write_records(out, &records, format)?;
        }
        Command::Update {
            name,
            record_type,
            content,
            proxied,
            ttl,
        } => {
            client
                .upsert_record(&name, &record_type, &content, proxied, ttl)
                .await?;
        }
        Command::Delete { name } => {
            client.delete_record(&name).await?;
        }
        Command::Help(text) | Command::Version(text) => write!(out, "{text}")?,
    }
    Ok(())
}
