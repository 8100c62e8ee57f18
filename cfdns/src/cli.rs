//! Command-line grammar
//!
//! ```text
//! cfdns get [<name>] [--json] [--long]
//! cfdns delete <name>
//! cfdns update <name> <type> <content> [--proxy] [--ttl <seconds>]
//! cfdns --help | --version
//! ```

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

use crate::error::{AppError, AppResult};
use crate::output::OutputFormat;

/// Manage the DNS records of one Cloudflare zone.
#[derive(Parser, Debug)]
#[command(name = "cfdns", version, long_about = None)]
struct Cli {
    /// Settings file [default: ~/.config/cloudflare/config.ini]
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log API requests and responses to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Show the records named <NAME>, or every record in the zone
    Get {
        /// Record name, relative to the domain or fully qualified
        name: Option<String>,
        /// Print records as JSON (wins over --long)
        #[arg(long)]
        json: bool,
        /// Print one block of fields per record
        #[arg(long)]
        long: bool,
    },
    /// Delete the record named <NAME> (nothing happens if it does not exist)
    Delete {
        /// Record name, relative to the domain or fully qualified
        name: String,
    },
    /// Create the record named <NAME>, or replace it if it exists
    Update {
        /// Record name, relative to the domain or fully qualified
        name: String,
        /// Record type (A, AAAA, CNAME, TXT, ...)
        #[arg(value_name = "TYPE")]
        record_type: String,
        /// Record content
        #[arg(allow_hyphen_values = true)]
        content: String,
        /// Route traffic through the Cloudflare proxy (CNAME/A/AAAA only)
        #[arg(long)]
        proxy: bool,
        /// TTL in seconds; the provider default applies when omitted
        #[arg(long, value_name = "SECONDS")]
        ttl: Option<u32>,
    },
}

/// What to do, with only the fields each action needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Get {
        name: Option<String>,
        format: OutputFormat,
    },
    Delete {
        name: String,
    },
    Update {
        name: String,
        record_type: String,
        content: String,
        proxied: bool,
        ttl: Option<u32>,
    },
    /// Rendered help text, printed to stdout
    Help(String),
    /// Rendered version line, printed to stdout
    Version(String),
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub config_path: Option<PathBuf>,
    pub verbose: bool,
    pub command: Command,
}

impl Invocation {
    fn bare(command: Command) -> Self {
        Self {
            config_path: None,
            verbose: false,
            command,
        }
    }
}

impl From<Cli> for Invocation {
    fn from(cli: Cli) -> Self {
        let command = match cli.command {
            CliCommand::Get { name, json, long } => Command::Get {
                name,
                format: OutputFormat::from_flags(json, long),
            },
            CliCommand::Delete { name } => Command::Delete { name },
            CliCommand::Update {
                name,
                record_type,
                content,
                proxy,
                ttl,
            } => Command::Update {
                name,
                record_type: record_type.to_ascii_uppercase(),
                content,
                proxied: proxy,
                ttl,
            },
        };

        Self {
            config_path: cli.config,
            verbose: cli.verbose,
            command,
        }
    }
}

/// Parse a full argument vector (program name first).
///
/// Help and version requests come back as [`Command::Help`] / [`Command::Version`];
/// anything else clap rejects becomes [`AppError::Usage`] with the rendered message.
pub fn parse_args<I, T>(args: I) -> AppResult<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(cli.into()),
        Err(e) => {
            let text = e.render().to_string();
            match e.kind() {
                ErrorKind::DisplayHelp => Ok(Invocation::bare(Command::Help(text))),
                ErrorKind::DisplayVersion => Ok(Invocation::bare(Command::Version(text))),
                _ => Err(AppError::Usage(text)),
            }
        }
    }
}
