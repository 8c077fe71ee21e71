//! POI repository interface

use async_trait::async_trait;

use super::commands::{NewPoi, PoiChanges};
use super::model::{Poi, PoiRecord, PoiStatus};
use crate::domain::DomainResult;
use crate::shared::{PaginatedResult, PaginationParams};

/// Transactional access to the POI aggregate.
///
/// Every multi-row mutation runs in a single store transaction. Reads return
/// the aggregate with its address, opening hours and pump tree resolved.
#[async_trait]
pub trait PoiRepository: Send + Sync {
    /// Inserts the POI together with its optional address and opening hours.
    async fn create(&self, new_poi: NewPoi) -> DomainResult<PoiRecord>;

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Poi>>;

    async fn list(&self, params: PaginationParams) -> DomainResult<PaginatedResult<Poi>>;

    /// Fails with `NotFound` when the POI does not exist.
    async fn update(&self, id: &str, changes: PoiChanges) -> DomainResult<Poi>;

    async fn update_status(&self, id: &str, status: PoiStatus) -> DomainResult<Poi>;

    /// Children are removed by the store's cascade rules.
    async fn delete(&self, id: &str) -> DomainResult<()>;
}
