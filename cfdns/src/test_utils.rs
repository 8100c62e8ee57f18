//! 测试辅助模块
//!
//! 提供内存中的 `DnsProvider` mock，记录每一次调用以便断言请求顺序。

use async_trait::async_trait;
use cfdns_provider::{
    DnsProvider, DnsRecord, PaginatedResponse, ProviderError, RecordQueryParams, RecordRequest,
    Result, Zone,
};
use tokio::sync::RwLock;

pub const ZONE_ID: &str = "zone-1";
pub const DOMAIN: &str = "example.com";

/// One call received by [`MockProvider`], in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderCall {
    FindZones(String),
    ListRecords { name: Option<String>, page: u32 },
    Create(RecordRequest),
    Update { record_id: String, req: RecordRequest },
    Delete(String),
}

// ===== MockProvider =====

pub struct MockProvider {
    zones: Vec<Zone>,
    records: RwLock<Vec<DnsRecord>>,
    calls: RwLock<Vec<ProviderCall>>,
    next_id: RwLock<u32>,
    /// 如果 Some，所有调用都返回此错误
    fail_with: RwLock<Option<ProviderError>>,
}

impl MockProvider {
    /// A provider hosting the `example.com` zone with no records.
    pub fn new() -> Self {
        Self::with_zones(vec![zone(ZONE_ID, DOMAIN)])
    }

    pub fn with_zones(zones: Vec<Zone>) -> Self {
        Self {
            zones,
            records: RwLock::new(Vec::new()),
            calls: RwLock::new(Vec::new()),
            next_id: RwLock::new(1),
            fail_with: RwLock::new(None),
        }
    }

    pub async fn seed(&self, records: Vec<DnsRecord>) {
        self.records.write().await.extend(records);
    }

    pub async fn set_error(&self, err: Option<ProviderError>) {
        *self.fail_with.write().await = err;
    }

    pub async fn records(&self) -> Vec<DnsRecord> {
        self.records.read().await.clone()
    }

    pub async fn calls(&self) -> Vec<ProviderCall> {
        self.calls.read().await.clone()
    }

    /// Calls other than lookups.
    pub async fn writes(&self) -> Vec<ProviderCall> {
        self.calls
            .read()
            .await
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    ProviderCall::Create(_) | ProviderCall::Update { .. } | ProviderCall::Delete(_)
                )
            })
            .cloned()
            .collect()
    }

    async fn record_call(&self, call: ProviderCall) -> Result<()> {
        self.calls.write().await.push(call);
        match self.fail_with.read().await.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn not_found(record_id: &str) -> ProviderError {
        ProviderError::RecordNotFound {
            record_id: record_id.to_string(),
            message: "Record does not exist.".to_string(),
        }
    }
}

#[async_trait]
impl DnsProvider for MockProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn find_zones(&self, name: &str) -> Result<Vec<Zone>> {
        self.record_call(ProviderCall::FindZones(name.to_string()))
            .await?;
        Ok(self
            .zones
            .iter()
            .filter(|z| z.name.eq_ignore_ascii_case(name))
            .cloned()
            .collect())
    }

    async fn list_records(
        &self,
        _zone_id: &str,
        params: &RecordQueryParams,
    ) -> Result<PaginatedResponse<DnsRecord>> {
        self.record_call(ProviderCall::ListRecords {
            name: params.name.clone(),
            page: params.page,
        })
        .await?;

        let matching: Vec<DnsRecord> = self
            .records
            .read()
            .await
            .iter()
            .filter(|r| {
                params
                    .name
                    .as_ref()
                    .is_none_or(|n| r.name.eq_ignore_ascii_case(n))
            })
            .cloned()
            .collect();

        let total = u32::try_from(matching.len()).unwrap_or(u32::MAX);
        let skip = (params.page.saturating_sub(1) * params.page_size) as usize;
        let items = matching
            .into_iter()
            .skip(skip)
            .take(params.page_size as usize)
            .collect();
        Ok(PaginatedResponse::new(
            items,
            params.page,
            params.page_size,
            total,
        ))
    }

    async fn create_record(&self, _zone_id: &str, req: &RecordRequest) -> Result<DnsRecord> {
        self.record_call(ProviderCall::Create(req.clone())).await?;

        let mut next_id = self.next_id.write().await;
        let record = record_from_request(format!("rec-{next_id}"), req);
        *next_id += 1;
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn update_record(
        &self,
        _zone_id: &str,
        record_id: &str,
        req: &RecordRequest,
    ) -> Result<DnsRecord> {
        self.record_call(ProviderCall::Update {
            record_id: record_id.to_string(),
            req: req.clone(),
        })
        .await?;

        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|r| r.id.as_deref() == Some(record_id))
            .ok_or_else(|| Self::not_found(record_id))?;
        *slot = record_from_request(record_id.to_string(), req);
        Ok(slot.clone())
    }

    async fn delete_record(&self, _zone_id: &str, record_id: &str) -> Result<()> {
        self.record_call(ProviderCall::Delete(record_id.to_string()))
            .await?;

        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id.as_deref() != Some(record_id));
        if records.len() == before {
            return Err(Self::not_found(record_id));
        }
        Ok(())
    }
}

// ===== 工厂方法 =====

pub fn zone(id: &str, name: &str) -> Zone {
    Zone {
        id: id.to_string(),
        name: name.to_string(),
    }
}

pub fn record(id: &str, name: &str, record_type: &str, content: &str) -> DnsRecord {
    DnsRecord {
        id: Some(id.to_string()),
        name: name.to_string(),
        record_type: record_type.to_string(),
        content: content.to_string(),
        ttl: 1,
        proxied: false,
    }
}

fn record_from_request(id: String, req: &RecordRequest) -> DnsRecord {
    DnsRecord {
        id: Some(id),
        name: req.name.clone(),
        record_type: req.record_type.clone(),
        content: req.content.clone(),
        ttl: req.ttl.unwrap_or(1),
        proxied: req.proxied,
    }
}
