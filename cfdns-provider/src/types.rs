//! Provider-neutral record and zone types

use serde::{Deserialize, Serialize};

/// Cloudflare 单页上限，也是默认页大小
const DEFAULT_PAGE_SIZE: u32 = 100;

/// Which page of records to fetch, and optionally which name.
///
/// Pages start at 1. `name` must be fully qualified; matching is exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordQueryParams {
    pub page: u32,
    pub page_size: u32,
    pub name: Option<String>,
}

impl Default for RecordQueryParams {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            name: None,
        }
    }
}

impl RecordQueryParams {
    /// First page of records named exactly `name`.
    pub fn for_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }

    /// `page >= 1` and `1 <= page_size <= max_page_size`.
    #[must_use]
    pub fn validated(&self, max_page_size: u32) -> Self {
        Self {
            page: self.page.max(1),
            page_size: self.page_size.clamp(1, max_page_size),
            name: self.name.clone(),
        }
    }
}

/// One page of results plus what is needed to ask for the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    /// Matching items across all pages
    pub total_count: u32,
    /// `false` on the last page, and on any empty page
    pub has_more: bool,
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, page: u32, page_size: u32, total_count: u32) -> Self {
        let has_more = !items.is_empty() && page.saturating_mul(page_size) < total_count;
        Self {
            items,
            page,
            page_size,
            total_count,
            has_more,
        }
    }
}

/// The provider-side container of the managed domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    /// e.g. `"example.com"`
    pub name: String,
}

/// One DNS record as the provider reports it.
///
/// Serializes with the API's field names (`record_type` as `"type"`); `--json`
/// output is exactly this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    /// `None` until the record exists remotely
    pub id: Option<String>,
    /// Fully qualified, without the trailing dot
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    /// Seconds; `1` means automatic on Cloudflare
    pub ttl: u32,
    pub proxied: bool,
}

/// Body of a create, or of an update that replaces the whole record.
///
/// A `None` ttl is left out of the JSON so the provider default applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    pub proxied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_for_name_keeps_defaults() {
        let q = RecordQueryParams::for_name("www.example.com");
        assert_eq!(q.page, 1);
        assert_eq!(q.page_size, 100);
        assert_eq!(q.name.as_deref(), Some("www.example.com"));
    }

    #[test]
    fn query_validated_clamps() {
        let q = RecordQueryParams {
            page: 0,
            page_size: 5000,
            name: None,
        }
        .validated(100);
        assert_eq!(q.page, 1);
        assert_eq!(q.page_size, 100);
    }

    #[test]
    fn paginated_has_more() {
        let page = PaginatedResponse::new(vec![1, 2], 1, 2, 3);
        assert!(page.has_more);
        let last = PaginatedResponse::new(vec![3], 2, 2, 3);
        assert!(!last.has_more);
    }

    #[test]
    fn paginated_empty_page_stops() {
        let page: PaginatedResponse<u8> = PaginatedResponse::new(vec![], 1, 100, 500);
        assert!(!page.has_more);
    }

    #[test]
    fn record_serializes_type_field() {
        let record = DnsRecord {
            id: Some("abc123".to_string()),
            name: "www.example.com".to_string(),
            record_type: "A".to_string(),
            content: "1.2.3.4".to_string(),
            ttl: 300,
            proxied: false,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "A");
        assert_eq!(json["id"], "abc123");
        assert_eq!(json["proxied"], false);
    }

    #[test]
    fn request_omits_missing_ttl() {
        let req = RecordRequest {
            name: "www.example.com".to_string(),
            record_type: "A".to_string(),
            content: "1.2.3.4".to_string(),
            proxied: false,
            ttl: None,
        };
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({
                "name": "www.example.com",
                "type": "A",
                "content": "1.2.3.4",
                "proxied": false
            })
        );
    }
}
