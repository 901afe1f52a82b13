//! API Router with Swagger UI

use std::path::Path;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::common::{ApiResponse, EmptyData};
use super::modules::{cities, health, tariffs};
use super::state::AppState;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        // Cities
        cities::list_cities,
        cities::create_city,
        cities::delete_city,
        cities::delete_city_tariff,
        // Tariffs
        tariffs::list_tariffs,
        tariffs::create_tariff,
        tariffs::delete_tariff,
        // Tariff types
        tariffs::list_tariff_types,
        tariffs::create_tariff_type,
        tariffs::delete_tariff_type,
        // Types
        tariffs::list_types,
        tariffs::create_type,
        tariffs::delete_type,
        // Icons
        tariffs::list_icons,
        tariffs::upload_icon,
        tariffs::delete_icon,
    ),
    components(
        schemas(
            ApiResponse<EmptyData>,
            EmptyData,
            health::HealthResponse,
            health::ComponentHealth,
            cities::CityDto,
            cities::CreateCityRequest,
            cities::DeleteCityRequest,
            cities::CityTariffRequest,
            tariffs::IdRequest,
            tariffs::TypeDto,
            tariffs::CreateTypeRequest,
            tariffs::IconDto,
            tariffs::IconUploadForm,
            tariffs::IconUploadResponse,
            tariffs::DescriptionDto,
            tariffs::TariffTypeDto,
            tariffs::CreateTariffTypeRequest,
            tariffs::TariffDto,
            tariffs::TariffTypeRef,
            tariffs::CreateTariffRequest,
            tariffs::TariffsQuery,
        )
    ),
    tags(
        (name = "Health", description = "Service health check"),
        (name = "Cities", description = "Cities and their tariff links"),
        (name = "Tariffs", description = "Tariffs offered in a city"),
        (name = "Tariff types", description = "Tariff feature blocks with localized descriptions"),
        (name = "Types", description = "Tariff-type categories"),
        (name = "Icons", description = "Uploaded icon images"),
    ),
    info(
        title = "Tariff Catalog API",
        version = "1.0.0",
        description = "CRUD API for cities, tariffs, tariff-types, types and icons",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Build the router. Uploaded files under `static_dir` are served at `/assets`.
pub fn create_router(state: AppState, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .route("/health", get(health::health_check))
        // Cities
        .route("/cities", get(cities::list_cities))
        .route(
            "/city",
            post(cities::create_city).delete(cities::delete_city),
        )
        .route("/tariff-city", delete(cities::delete_city_tariff))
        // Tariffs
        .route("/tariffs", get(tariffs::list_tariffs))
        .route(
            "/tariff",
            post(tariffs::create_tariff).delete(tariffs::delete_tariff),
        )
        // Tariff types
        .route("/tariff-types", get(tariffs::list_tariff_types))
        .route(
            "/tariff-type",
            post(tariffs::create_tariff_type).delete(tariffs::delete_tariff_type),
        )
        // Types
        .route("/types", get(tariffs::list_types))
        .route(
            "/type",
            post(tariffs::create_type).delete(tariffs::delete_type),
        )
        // Icons
        .route("/icons", get(tariffs::list_icons))
        .route(
            "/icon",
            post(tariffs::upload_icon).delete(tariffs::delete_icon),
        )
        .nest_service("/assets", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

// ── Tests ──────────────────────────────────────────────────────
