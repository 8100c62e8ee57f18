//! Record rendering for `get`

use std::io::Write;

use cfdns_provider::DnsRecord;

use crate::error::AppResult;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Zone-file style, one line per record
    #[default]
    Short,
    /// One block of labelled fields per record
    Long,
    /// Pretty-printed JSON array
    Json,
}

impl OutputFormat {
    /// `--json` wins over `--long`; neither means short.
    pub fn from_flags(json: bool, long: bool) -> Self {
        if json {
            Self::Json
        } else if long {
            Self::Long
        } else {
            Self::Short
        }
    }
}

/// Write `records` to `out` in input order.
pub fn write_records(
    out: &mut dyn Write,
    records: &[DnsRecord],
    format: OutputFormat,
) -> AppResult<()> {
    match format {
        OutputFormat::Short => {
            for record in records {
                writeln!(out, "{}", short_line(record))?;
            }
        }
        OutputFormat::Long => {
            for record in records {
                write_long(out, record)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records).map_err(std::io::Error::from)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// `www.example.com.    300     IN A       1.2.3.4`
fn short_line(record: &DnsRecord) -> String {
    format!(
        "{:<50.50} {:<7} IN {:<7} {}",
        format!("{}.", record.name),
        record.ttl,
        record.record_type,
        record.content
    )
}

fn write_long(out: &mut dyn Write, record: &DnsRecord) -> std::io::Result<()> {
    writeln!(out, "Name:    {}", record.name)?;
    writeln!(out, "Type:    {}", record.record_type)?;
    writeln!(out, "Content: {}", record.content)?;
    writeln!(out, "TTL:     {}", record.ttl)?;
    writeln!(out, "Proxied: {}", record.proxied)?;
    writeln!(out)
}
