//! Log sanitization utilities
//!
//! Keeps the API token and oversized response bodies out of log output
//! and `Debug` representations.

/// Maximum number of bytes of a body to include in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Number of leading characters of a secret left visible by [`mask_secret`].
const SECRET_VISIBLE_CHARS: usize = 4;

/// Truncate a string for safe logging.
///
/// Returns the original string if it's within the limit, otherwise the longest
/// prefix of at most `TRUNCATE_LIMIT` bytes that ends on a char boundary,
/// followed by the total length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }

    let cut = s
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .take_while(|&end| end <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);

    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}

/// Mask a credential for display: `"abcd****"`.
///
/// Secrets too short to reveal a prefix are fully masked.
pub fn mask_secret(secret: &str) -> String {
    if secret.chars().count() <= SECRET_VISIBLE_CHARS * 2 {
        return "****".to_string();
    }
    let prefix: String = secret.chars().take(SECRET_VISIBLE_CHARS).collect();
    format!("{prefix}****")
}
