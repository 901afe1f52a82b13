//! City API handlers

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{CityDto, CityTariffRequest, CreateCityRequest, DeleteCityRequest};
use crate::interfaces::http::common::{ApiResponse, EmptyData, ValidatedJson};
use crate::interfaces::http::error::ApiError;
use crate::interfaces::http::state::AppState;

#[utoipa::path(
    get,
    path = "/cities",
    tag = "Cities",
    responses(
        (status = 200, description = "All cities", body = ApiResponse<Vec<CityDto>>),
        (status = 500, description = "Store failure", body = ApiResponse<EmptyData>)
    )
)]
pub async fn list_cities(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<CityDto>>>, ApiError> {
    let cities = state.cities.list_cities().await?;
    Ok(Json(ApiResponse::success(
        cities.into_iter().map(CityDto::from).collect(),
    )))
}

#[utoipa::path(
    post,
    path = "/city",
    tag = "Cities",
    request_body = CreateCityRequest,
    responses(
        (status = 201, description = "City created", body = ApiResponse<EmptyData>),
        (status = 400, description = "Name missing or empty", body = ApiResponse<EmptyData>),
        (status = 500, description = "Store failure", body = ApiResponse<EmptyData>)
    )
)]
pub async fn create_city(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateCityRequest>,
) -> Result<(StatusCode, Json<ApiResponse<EmptyData>>), ApiError> {
    state.cities.add_city(req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok())))
}

#[utoipa::path(
    delete,
    path = "/city",
    tag = "Cities",
    request_body = DeleteCityRequest,
    responses(
        (status = 200, description = "City removed (or did not exist)", body = ApiResponse<EmptyData>)
    )
)]
pub async fn delete_city(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<DeleteCityRequest>,
) -> Result<Json<ApiResponse<EmptyData>>, ApiError> {
    state.cities.remove_city(req.id).await?;
    Ok(Json(ApiResponse::ok()))
}

#[utoipa::path(
    delete,
    path = "/tariff-city",
    tag = "Cities",
    request_body = CityTariffRequest,
    responses(
        (status = 200, description = "Link removed (or did not exist)", body = ApiResponse<EmptyData>)
    )
)]
pub async fn delete_city_tariff(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CityTariffRequest>,
) -> Result<Json<ApiResponse<EmptyData>>, ApiError> {
    state.cities.remove_city_tariff(req.into()).await?;
    Ok(Json(ApiResponse::ok()))
}
