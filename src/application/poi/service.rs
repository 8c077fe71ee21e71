//! POI application service

use std::sync::Arc;

use log::{error, info};

use super::payloads::{CreatePoiPayload, UpdatePoiPayload, UpdateStatusPayload};
use super::validation::{validate_create, validate_status, validate_update};
use crate::domain::{DomainError, DomainResult, Poi, PoiRecord, PoiRepository};
use crate::shared::{PaginatedResult, PaginationParams};

/// Message returned for any store failure during creation.
pub const CREATE_FAILED: &str = "Failed to create POI";

/// Validates payloads, delegates to the repository and normalizes the outcome
/// into `DomainError`.
pub struct PoiService {
    repo: Arc<dyn PoiRepository>,
}

fn record_mutation(operation: &'static str) {
    metrics::counter!("poi_mutations_total", "operation" => operation).increment(1);
}

impl PoiService {
    pub fn new(repo: Arc<dyn PoiRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_poi(&self, payload: CreatePoiPayload) -> DomainResult<PoiRecord> {
        let new_poi = validate_create(payload)?;

        match self.repo.create(new_poi).await {
            Ok(record) => {
                record_mutation("create");
                Ok(record)
            }
            Err(DomainError::Persistence(cause)) => {
                error!("POI creation failed: {}", cause);
                Err(DomainError::Persistence(CREATE_FAILED.to_string()))
            }
            Err(other) => Err(other),
        }
    }

    pub async fn get_poi(&self, id: &str) -> DomainResult<Poi> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::poi_not_found(id))
    }

    pub async fn list_pois(&self, params: PaginationParams) -> DomainResult<PaginatedResult<Poi>> {
        self.repo.list(params).await
    }

    pub async fn update_poi(&self, id: &str, payload: UpdatePoiPayload) -> DomainResult<Poi> {
        let changes = validate_update(payload)?;
        let poi = self.repo.update(id, changes).await?;
        record_mutation("update");
        Ok(poi)
    }

    pub async fn update_poi_status(
        &self,
        id: &str,
        payload: UpdateStatusPayload,
    ) -> DomainResult<Poi> {
        let status = validate_status(payload)?;
        let poi = self.repo.update_status(id, status).await?;
        record_mutation("update_status");
        Ok(poi)
    }

    pub async fn delete_poi(&self, id: &str) -> DomainResult<()> {
        self.repo.delete(id).await?;
        record_mutation("delete");
        info!("POI {} removed", id);
        Ok(())
    }
}
