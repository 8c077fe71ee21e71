//! POI API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{ListPoisQuery, PoiDto, PoiPageDto, PoiRecordDto};
use crate::application::{CreatePoiPayload, PoiService, UpdatePoiPayload, UpdateStatusPayload};
use crate::interfaces::http::common::{domain_error, ApiResponse, ApiResult, JsonBody, MessageResponse};
use crate::shared::validate_pagination;

/// POI handler state
#[derive(Clone)]
pub struct PoiState {
    pub service: Arc<PoiService>,
}

#[utoipa::path(
    post,
    path = "/api/poi",
    tag = "POI",
    request_body = CreatePoiPayload,
    responses(
        (status = 201, description = "POI created", body = ApiResponse<PoiRecordDto>),
        (status = 400, description = "Malformed body or field validation failed"),
        (status = 500, description = "Failed to create POI")
    )
)]
pub async fn create_poi(
    State(state): State<PoiState>,
    JsonBody(body): JsonBody<CreatePoiPayload>,
) -> ApiResult<PoiRecordDto> {
    match state.service.create_poi(body).await {
        Ok(record) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse::success(PoiRecordDto::from(record))),
        )),
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/poi",
    tag = "POI",
    params(ListPoisQuery),
    responses(
        (status = 200, description = "One page of POIs", body = ApiResponse<PoiPageDto>)
    )
)]
pub async fn list_pois(
    State(state): State<PoiState>,
    Query(query): Query<ListPoisQuery>,
) -> ApiResult<PoiPageDto> {
    let params = validate_pagination(query.page.as_deref(), query.limit.as_deref());
    match state.service.list_pois(params).await {
        Ok(page) => Ok((StatusCode::OK, Json(ApiResponse::success(PoiPageDto::from(page))))),
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/poi/{id}",
    tag = "POI",
    params(("id" = String, Path, description = "POI ID")),
    responses(
        (status = 200, description = "POI with address, opening hours and pumps", body = ApiResponse<PoiDto>),
        (status = 404, description = "POI not found")
    )
)]
pub async fn get_poi(
    State(state): State<PoiState>,
    Path(id): Path<String>,
) -> ApiResult<PoiDto> {
    match state.service.get_poi(&id).await {
        Ok(poi) => Ok((StatusCode::OK, Json(ApiResponse::success(PoiDto::from(poi))))),
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    put,
    path = "/api/poi/{id}",
    tag = "POI",
    params(("id" = String, Path, description = "POI ID")),
    request_body = UpdatePoiPayload,
    responses(
        (status = 200, description = "POI updated", body = ApiResponse<PoiDto>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "POI not found")
    )
)]
pub async fn update_poi(
    State(state): State<PoiState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<UpdatePoiPayload>,
) -> ApiResult<PoiDto> {
    match state.service.update_poi(&id, body).await {
        Ok(poi) => Ok((StatusCode::OK, Json(ApiResponse::success(PoiDto::from(poi))))),
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    patch,
    path = "/api/poi/{id}/status",
    tag = "POI",
    params(("id" = String, Path, description = "POI ID")),
    request_body = UpdateStatusPayload,
    responses(
        (status = 200, description = "Status changed", body = ApiResponse<PoiDto>),
        (status = 400, description = "Unknown status"),
        (status = 404, description = "POI not found")
    )
)]
pub async fn update_poi_status(
    State(state): State<PoiState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<UpdateStatusPayload>,
) -> ApiResult<PoiDto> {
    match state.service.update_poi_status(&id, body).await {
        Ok(poi) => Ok((StatusCode::OK, Json(ApiResponse::success(PoiDto::from(poi))))),
        Err(e) => Err(domain_error(e)),
    }
}

#[utoipa::path(
    delete,
    path = "/api/poi/{id}",
    tag = "POI",
    params(("id" = String, Path, description = "POI ID")),
    responses(
        (status = 200, description = "POI and all of its children deleted", body = ApiResponse<MessageResponse>),
        (status = 404, description = "POI not found")
    )
)]
pub async fn delete_poi(
    State(state): State<PoiState>,
    Path(id): Path<String>,
) -> ApiResult<MessageResponse> {
    match state.service.delete_poi(&id).await {
        Ok(()) => Ok((
            StatusCode::OK,
            Json(ApiResponse::success(MessageResponse::new(
                "POI deleted successfully",
            ))),
        )),
        Err(e) => Err(domain_error(e)),
    }
}
