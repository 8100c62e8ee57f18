//! Cloudflare error code mapping
//!
//! Codes: <https://developers.cloudflare.com/api/> (per-endpoint error tables)

use crate::error::ProviderError;
use crate::log_sanitizer::truncate_for_log;

use super::types::ApiMessage;

/// What a request was about, so an error can name it.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Target<'a> {
    Zone(&'a str),
    Record {
        name: Option<&'a str>,
        id: Option<&'a str>,
    },
}

impl Target<'_> {
    fn record_name(&self) -> &str {
        match self {
            Self::Record { name: Some(n), .. } => n,
            _ => "<unknown>",
        }
    }

    fn record_id(&self) -> &str {
        match self {
            Self::Record { id: Some(id), .. } => id,
            _ => "<unknown>",
        }
    }

    fn zone(&self) -> &str {
        match self {
            Self::Zone(z) => z,
            Self::Record { .. } => "<unknown>",
        }
    }
}

/// 字段校验类错误码 -> 出错字段
fn invalid_field(code: i32) -> Option<&'static str> {
    match code {
        // 9000 invalid or missing name
        9000 => Some("name"),
        // 9005/9006 bad IPv4/IPv6, 9007 bad CNAME target, 9009 bad MX host
        9005..=9007 | 9009 => Some("content"),
        // 9021 TTL out of range
        9021 => Some("ttl"),
        // 9041 record type cannot be proxied
        9041 => Some("proxied"),
        // 1004 DNS validation error, 9020 invalid record type
        1004 | 9020 => Some("record"),
        _ => None,
    }
}

/// Map the first entry of a `success: false` envelope.
pub(crate) fn api_error(err: ApiMessage, target: Target<'_>) -> ProviderError {
    let ApiMessage { code, message } = err;

    if let Some(param) = invalid_field(code) {
        return ProviderError::InvalidParameter { param, message };
    }

    match code {
        // 6003 bad request headers, 6103/6111 malformed auth header,
        // 9106/9109 missing or invalid token, 10000 authentication error
        6003 | 6103 | 6111 | 9106 | 9109 | 10000 => ProviderError::InvalidCredentials {
            message: Some(message),
        },
        // 10001 token lacks permission
        10001 => ProviderError::PermissionDenied {
            message: Some(message),
        },
        // 81053..=81058 a record with that host/settings already exists
        81053..=81058 => ProviderError::RecordExists {
            name: target.record_name().to_string(),
            message,
        },
        81044 => ProviderError::RecordNotFound {
            record_id: target.record_id().to_string(),
            message,
        },
        81045 => ProviderError::QuotaExceeded(message),
        // 7000 no route, 7003 invalid object identifier in path
        7000 | 7003 => ProviderError::ZoneNotFound {
            zone: target.zone().to_string(),
            message,
        },
        _ => ProviderError::Api {
            code: Some(code),
            message,
        },
    }
}

/// Fallback for error responses whose body is not an API envelope.
pub(crate) fn status_error(status: u16, body: &str) -> ProviderError {
    let message = Some(body.trim())
        .filter(|b| !b.is_empty())
        .map(truncate_for_log);
    match status {
        401 => ProviderError::InvalidCredentials { message },
        403 => ProviderError::PermissionDenied { message },
        _ => ProviderError::Parse(format!(
            "HTTP {status} with non-JSON body: {}",
            message.unwrap_or_default()
        )),
    }
}
