//! Record operations scoped to the configured zone

use std::sync::Arc;

use cfdns_provider::{DnsProvider, DnsRecord, RecordQueryParams, RecordRequest, Zone, qualify_name};

use crate::error::{AppError, AppResult};

/// What [`ZoneClient::upsert_record`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created(DnsRecord),
    Updated(DnsRecord),
}

/// A provider bound to the one zone resolved for this run.
pub struct ZoneClient {
    provider: Arc<dyn DnsProvider>,
    zone: Zone,
    domain: String,
}

impl ZoneClient {
    /// Look up the zone named exactly `domain`.
    ///
    /// Fails with [`AppError::ZoneNotFound`] when the provider has no such zone.
    pub async fn resolve(provider: Arc<dyn DnsProvider>, domain: &str) -> AppResult<Self> {
        let zone = provider
            .find_zones(domain)
            .await?
            .into_iter()
            .find(|z| z.name.eq_ignore_ascii_case(domain))
            .ok_or_else(|| AppError::ZoneNotFound {
                domain: domain.to_string(),
            })?;

        tracing::debug!("Resolved zone {} ({})", zone.name, zone.id);
        Ok(Self {
            provider,
            zone,
            domain: domain.to_string(),
        })
    }

    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    /// Fully-qualified form of `name` within the configured domain.
    pub fn qualify(&self, name: &str) -> String {
        qualify_name(name, &self.domain)
    }

    /// First record named exactly `fqdn`, if any.
    pub async fn find_record(&self, fqdn: &str) -> AppResult<Option<DnsRecord>> {
        let page = self
            .provider
            .list_records(&self.zone.id, &RecordQueryParams::for_name(fqdn))
            .await?;
        if page.items.len() > 1 {
            tracing::debug!("{} records named {fqdn}, using the first", page.items.len());
        }
        Ok(page.items.into_iter().next())
    }

    /// Every record in the zone, in provider order.
    pub async fn list_records(&self) -> AppResult<Vec<DnsRecord>> {
        self.collect_pages(RecordQueryParams::default()).await
    }

    /// Every record named `name` (qualified first).
    pub async fn get_records(&self, name: &str) -> AppResult<Vec<DnsRecord>> {
        self.collect_pages(RecordQueryParams::for_name(self.qualify(name)))
            .await
    }

    /// Create the record, or fully replace the existing record with the same name.
    ///
    /// No conflict detection between lookup and write: the last writer wins.
    pub async fn upsert_record(
        &self,
        name: &str,
        record_type: &str,
        content: &str,
        proxied: bool,
        ttl: Option<u32>,
    ) -> AppResult<UpsertOutcome> {
        let fqdn = self.qualify(name);
        let req = RecordRequest {
            name: fqdn.clone(),
            record_type: record_type.to_string(),
            content: content.to_string(),
            proxied,
            ttl,
        };

        match self.find_record(&fqdn).await?.and_then(|r| r.id) {
            Some(record_id) => {
                let record = self
                    .provider
                    .update_record(&self.zone.id, &record_id, &req)
                    .await?;
                tracing::info!("Updated {record_type} record {fqdn} ({record_id})");
                Ok(UpsertOutcome::Updated(record))
            }
            None => {
                let record = self.provider.create_record(&self.zone.id, &req).await?;
                tracing::info!("Created {record_type} record {fqdn}");
                Ok(UpsertOutcome::Created(record))
            }
        }
    }

    /// Delete the record named `name`. Returns `false` when nothing matched.
    pub async fn delete_record(&self, name: &str) -> AppResult<bool> {
        let fqdn = self.qualify(name);
        let Some(record_id) = self.find_record(&fqdn).await?.and_then(|r| r.id) else {
            tracing::info!("No record named {fqdn}, nothing to delete");
            return Ok(false);
        };

        self.provider
            .delete_record(&self.zone.id, &record_id)
            .await?;
        tracing::info!("Deleted record {fqdn} ({record_id})");
        Ok(true)
    }

    async fn collect_pages(&self, mut params: RecordQueryParams) -> AppResult<Vec<DnsRecord>> {
        let mut records = Vec::new();
        loop {
            let page = self.provider.list_records(&self.zone.id, &params).await?;
            let has_more = page.has_more;
            records.extend(page.items);
            if !has_more {
                break;
            }
            params = params.with_page(page.page + 1);
        }
        Ok(records)
    }
}
