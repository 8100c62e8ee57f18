use async_trait::async_trait;

use crate::error::Result;
use crate::types::{DnsRecord, PaginatedResponse, RecordQueryParams, RecordRequest, Zone};

/// Record-level access to a DNS hosting API.
///
/// Every record call is scoped to a zone id returned by [`find_zones`](Self::find_zones).
/// Implementations send each request once and report failures as they come back.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Short provider identifier used in logs.
    fn id(&self) -> &'static str;

    /// Zones whose name matches `name` exactly. Empty when there is none.
    async fn find_zones(&self, name: &str) -> Result<Vec<Zone>>;

    /// One page of records, optionally filtered to an exact fully-qualified name.
    async fn list_records(
        &self,
        zone_id: &str,
        params: &RecordQueryParams,
    ) -> Result<PaginatedResponse<DnsRecord>>;

    async fn create_record(&self, zone_id: &str, req: &RecordRequest) -> Result<DnsRecord>;

    /// Replace every field of `record_id` with `req`.
    async fn update_record(
        &self,
        zone_id: &str,
        record_id: &str,
        req: &RecordRequest,
    ) -> Result<DnsRecord>;

    async fn delete_record(&self, zone_id: &str, record_id: &str) -> Result<()>;
}
