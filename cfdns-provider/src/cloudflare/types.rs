//! Cloudflare v4 wire types

use serde::Deserialize;

use crate::types::{DnsRecord, Zone};

/// `{ success, errors, result, result_info }`, shared by every endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub success: bool,
    pub result: Option<T>,
    #[serde(default)]
    pub errors: Vec<ApiMessage>,
    pub result_info: Option<ResultInfo>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiMessage {
    pub code: i32,
    pub message: String,
}

/// 分页信息（只用到总数）
#[derive(Debug, Deserialize)]
pub(crate) struct ResultInfo {
    #[serde(default)]
    pub total_count: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ZoneResult {
    pub id: String,
    pub name: String,
}

impl From<ZoneResult> for Zone {
    fn from(zone: ZoneResult) -> Self {
        Self {
            id: zone.id,
            name: zone.name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecordResult {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    pub ttl: u32,
    /// 不可代理的记录类型上可能缺省
    #[serde(default)]
    pub proxied: Option<bool>,
}

impl From<RecordResult> for DnsRecord {
    fn from(record: RecordResult) -> Self {
        Self {
            id: Some(record.id),
            name: record.name,
            record_type: record.record_type,
            content: record.content,
            ttl: record.ttl,
            proxied: record.proxied.unwrap_or(false),
        }
    }
}
