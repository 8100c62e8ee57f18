//! `DnsProvider` over the Cloudflare zones and `dns_records` endpoints

use async_trait::async_trait;
use reqwest::Method;

use crate::error::Result;
use crate::provider::DnsProvider;
use crate::types::{DnsRecord, PaginatedResponse, RecordQueryParams, RecordRequest, Zone};

use super::error::Target;
use super::types::{RecordResult, ZoneResult};
use super::{CloudflareProvider, MAX_PAGE_SIZE_RECORDS, MAX_PAGE_SIZE_ZONES};

fn records_path(zone_id: &str) -> String {
    format!("/zones/{zone_id}/dns_records")
}

fn record_path(zone_id: &str, record_id: &str) -> String {
    format!("/zones/{zone_id}/dns_records/{record_id}")
}

#[async_trait]
impl DnsProvider for CloudflareProvider {
    fn id(&self) -> &'static str {
        "cloudflare"
    }

    async fn find_zones(&self, name: &str) -> Result<Vec<Zone>> {
        let path = format!(
            "/zones?name={}&per_page={MAX_PAGE_SIZE_ZONES}",
            urlencoding::encode(name)
        );
        let envelope = self.get::<Vec<ZoneResult>>(&path, Target::Zone(name)).await?;

        Ok(envelope
            .result
            .unwrap_or_default()
            .into_iter()
            .map(Zone::from)
            .collect())
    }

    async fn list_records(
        &self,
        zone_id: &str,
        params: &RecordQueryParams,
    ) -> Result<PaginatedResponse<DnsRecord>> {
        let params = params.validated(MAX_PAGE_SIZE_RECORDS);
        let mut path = format!(
            "{}?page={}&per_page={}",
            records_path(zone_id),
            params.page,
            params.page_size
        );

        // 按名称精确匹配
        if let Some(name) = params.name.as_deref().filter(|n| !n.is_empty()) {
            path.push_str("&name=");
            path.push_str(&urlencoding::encode(name));
        }

        let target = Target::Record {
            name: params.name.as_deref(),
            id: None,
        };
        let envelope = self.get::<Vec<RecordResult>>(&path, target).await?;

        let total_count = envelope.result_info.map_or(0, |info| info.total_count);
        let records = envelope
            .result
            .unwrap_or_default()
            .into_iter()
            .map(DnsRecord::from)
            .collect();

        Ok(PaginatedResponse::new(
            records,
            params.page,
            params.page_size,
            total_count,
        ))
    }

    async fn create_record(&self, zone_id: &str, req: &RecordRequest) -> Result<DnsRecord> {
        let target = Target::Record {
            name: Some(req.name.as_str()),
            id: None,
        };
        let created: RecordResult = self
            .write(Method::POST, &records_path(zone_id), req, target)
            .await?;
        log::info!("[cloudflare] Created {} record {}", req.record_type, req.name);
        Ok(created.into())
    }

    async fn update_record(
        &self,
        zone_id: &str,
        record_id: &str,
        req: &RecordRequest,
    ) -> Result<DnsRecord> {
        let target = Target::Record {
            name: Some(req.name.as_str()),
            id: Some(record_id),
        };
        let updated: RecordResult = self
            .write(Method::PUT, &record_path(zone_id, record_id), req, target)
            .await?;
        log::info!("[cloudflare] Replaced record {record_id} ({})", req.name);
        Ok(updated.into())
    }

    async fn delete_record(&self, zone_id: &str, record_id: &str) -> Result<()> {
        let target = Target::Record {
            name: None,
            id: Some(record_id),
        };
        self.delete(&record_path(zone_id, record_id), target).await?;
        log::info!("[cloudflare] Deleted record {record_id}");
        Ok(())
    }
}
