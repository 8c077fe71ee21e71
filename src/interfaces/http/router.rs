//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::get,
    Json, Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::{ApiResponse, MessageResponse};
use super::modules::{health, metrics, pois, request_id};
use crate::application::{
    AddressPayload, CreatePoiPayload, OpeningHoursPayload, PoiService, UpdatePoiPayload,
    UpdateStatusPayload,
};
use crate::shared::FieldError;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // POI
        pois::create_poi,
        pois::list_pois,
        pois::get_poi,
        pois::update_poi,
        pois::update_poi_status,
        pois::delete_poi,
    ),
    components(
        schemas(
            // Common
            ApiResponse<MessageResponse>,
            MessageResponse,
            FieldError,
            // Payloads
            CreatePoiPayload,
            UpdatePoiPayload,
            UpdateStatusPayload,
            AddressPayload,
            OpeningHoursPayload,
            // Responses
            pois::PoiDto,
            pois::PoiRecordDto,
            pois::PoiPageDto,
            pois::PaginationDto,
            pois::AddressDto,
            pois::OpeningHoursDto,
            pois::PumpDto,
            pois::FuelProductDto,
            pois::PriceDto,
            health::HealthResponse,
            health::ComponentHealth,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "POI", description = "Fuel station points of interest: address, opening hours, pumps"),
    ),
    info(
        title = "POI API",
        version = "1.0.0",
        description = "REST API for managing fuel station points of interest",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("POI API is running"))
}

/// Create the API router with all routes
///
/// `/metrics` is only mounted when a Prometheus recorder handle is supplied.
pub fn create_api_router(
    db: DatabaseConnection,
    poi_service: Arc<PoiService>,
    prometheus: Option<PrometheusHandle>,
) -> Router {
    let poi_routes = Router::new()
        .route("/api/poi", get(pois::list_pois).post(pois::create_poi))
        .route(
            "/api/poi/{id}",
            get(pois::get_poi)
                .put(pois::update_poi)
                .delete(pois::delete_poi),
        )
        .route(
            "/api/poi/{id}/status",
            axum::routing::patch(pois::update_poi_status),
        )
        .with_state(pois::PoiState {
            service: poi_service,
        });

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health::HealthState {
            db,
            started_at: Arc::new(Instant::now()),
        });

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    let mut router = Router::new()
        .merge(swagger_routes)
        .route("/", get(root))
        .merge(health_routes)
        .merge(poi_routes);

    if let Some(handle) = prometheus {
        router = router.merge(
            Router::new()
                .route("/metrics", get(metrics::prometheus_metrics))
                .with_state(metrics::MetricsState { handle }),
        );
    }

    router
        .layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ── Tests ──────────────────────────────────────────────────────
