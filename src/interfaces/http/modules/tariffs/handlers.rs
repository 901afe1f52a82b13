//! Tariff catalog API handlers

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Multipart, Query, State},
    Json,
};

use super::dto::{
    CreateTariffRequest, CreateTariffTypeRequest, CreateTypeRequest, IconDto, IconUploadForm,
    IconUploadResponse, IdRequest, TariffDto, TariffTypeDto, TariffsQuery, TypeDto,
};
use crate::interfaces::http::common::{ApiResponse, EmptyData, ValidatedJson};
use crate::interfaces::http::error::ApiError;
use crate::interfaces::http::state::AppState;

type Ack = Result<Json<ApiResponse<EmptyData>>, ApiError>;

fn ack() -> Ack {
    Ok(Json(ApiResponse::ok()))
}

/// Query string wins; otherwise the body is read as `{"city_id": ..}`.
fn resolve_city_id(
    query: Result<Query<TariffsQuery>, QueryRejection>,
    body: &[u8],
) -> Result<i32, ApiError> {
    match query {
        Ok(Query(TariffsQuery { city_id: Some(id) })) => return Ok(id),
        Ok(_) => {}
        Err(rejection) => {
            return Err(ApiError::BadRequest(format!("Invalid query: {}", rejection)));
        }
    }
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::BadRequest("city_id is required".into()));
    }
    match serde_json::from_slice::<TariffsQuery>(body) {
        Ok(TariffsQuery { city_id: Some(id) }) => Ok(id),
        Ok(_) => Err(ApiError::BadRequest("city_id is required".into())),
        Err(e) => Err(ApiError::BadRequest(format!("Invalid JSON: {}", e))),
    }
}

// ── Tariffs ─────────────────────────────────────────────────────

#[utoipa::path(
    get,
    path = "/tariffs",
    tag = "Tariffs",
    params(TariffsQuery),
    request_body(
        content = Option<TariffsQuery>,
        description = "Read only when the query string has no city_id",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Tariffs of the city with nested tariff-types", body = ApiResponse<Vec<TariffDto>>),
        (status = 400, description = "city_id missing", body = ApiResponse<EmptyData>),
        (status = 500, description = "Store failure", body = ApiResponse<EmptyData>)
    )
)]
pub async fn list_tariffs(
    State(state): State<AppState>,
    query: Result<Query<TariffsQuery>, QueryRejection>,
    body: Bytes,
) -> Result<Json<ApiResponse<Vec<TariffDto>>>, ApiError> {
    let city_id = resolve_city_id(query, &body)?;
    let tariffs = state.tariffs.list_tariffs(city_id).await?;
    Ok(Json(ApiResponse::success(
        tariffs.into_iter().map(TariffDto::from).collect(),
    )))
}

#[utoipa::path(
    post,
    path = "/tariff",
    tag = "Tariffs",
    request_body = CreateTariffRequest,
    responses(
        (status = 200, description = "Tariff created with its links", body = ApiResponse<EmptyData>),
        (status = 400, description = "Invalid data", body = ApiResponse<EmptyData>),
        (status = 500, description = "A step failed; earlier rows stay", body = ApiResponse<EmptyData>)
    )
)]
pub async fn create_tariff(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateTariffRequest>,
) -> Ack {
    state.tariffs.add_tariff(req.into()).await?;
    ack()
}

#[utoipa::path(
    delete,
    path = "/tariff",
    tag = "Tariffs",
    request_body = IdRequest,
    responses((status = 200, description = "Tariff removed", body = ApiResponse<EmptyData>))
)]
pub async fn delete_tariff(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<IdRequest>,
) -> Ack {
    state.tariffs.remove_tariff(req.id).await?;
    ack()
}

// ── Tariff-types ────────────────────────────────────────────────

#[utoipa::path(
    get,
    path = "/tariff-types",
    tag = "Tariff types",
    responses((status = 200, description = "All tariff-types", body = ApiResponse<Vec<TariffTypeDto>>))
)]
pub async fn list_tariff_types(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<TariffTypeDto>>>, ApiError> {
    let types = state.tariffs.list_tariff_types().await?;
    Ok(Json(ApiResponse::success(
        types.into_iter().map(TariffTypeDto::from).collect(),
    )))
}

#[utoipa::path(
    post,
    path = "/tariff-type",
    tag = "Tariff types",
    request_body = CreateTariffTypeRequest,
    responses(
        (status = 200, description = "Tariff-type created", body = ApiResponse<EmptyData>),
        (status = 409, description = "Unknown type or icon", body = ApiResponse<EmptyData>)
    )
)]
pub async fn create_tariff_type(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateTariffTypeRequest>,
) -> Ack {
    state.tariffs.add_tariff_type(req.into()).await?;
    ack()
}

#[utoipa::path(
    delete,
    path = "/tariff-type",
    tag = "Tariff types",
    request_body = IdRequest,
    responses((status = 200, description = "Tariff-type removed", body = ApiResponse<EmptyData>))
)]
pub async fn delete_tariff_type(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<IdRequest>,
) -> Ack {
    state.tariffs.remove_tariff_type(req.id).await?;
    ack()
}

// ── Types ───────────────────────────────────────────────────────

#[utoipa::path(
    get,
    path = "/types",
    tag = "Types",
    responses((status = 200, description = "All types", body = ApiResponse<Vec<TypeDto>>))
)]
pub async fn list_types(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<TypeDto>>>, ApiError> {
    let types = state.tariffs.list_types().await?;
    Ok(Json(ApiResponse::success(
        types.into_iter().map(TypeDto::from).collect(),
    )))
}

#[utoipa::path(
    post,
    path = "/type",
    tag = "Types",
    request_body = CreateTypeRequest,
    responses((status = 200, description = "Type created", body = ApiResponse<EmptyData>))
)]
pub async fn create_type(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateTypeRequest>,
) -> Ack {
    state.tariffs.add_type(req.into()).await?;
    ack()
}

#[utoipa::path(
    delete,
    path = "/type",
    tag = "Types",
    request_body = IdRequest,
    responses(
        (status = 200, description = "Type removed", body = ApiResponse<EmptyData>),
        (status = 409, description = "Type still used by a tariff-type", body = ApiResponse<EmptyData>)
    )
)]
pub async fn delete_type(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<IdRequest>,
) -> Ack {
    state.tariffs.remove_type(req.id).await?;
    ack()
}

// ── Icons ───────────────────────────────────────────────────────

#[utoipa::path(
    get,
    path = "/icons",
    tag = "Icons",
    responses((status = 200, description = "All icons", body = ApiResponse<Vec<IconDto>>))
)]
pub async fn list_icons(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<IconDto>>>, ApiError> {
    let icons = state.tariffs.list_icons().await?;
    Ok(Json(ApiResponse::success(
        icons.into_iter().map(IconDto::from).collect(),
    )))
}

#[utoipa::path(
    post,
    path = "/icon",
    tag = "Icons",
    request_body(content = IconUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Icon stored", body = ApiResponse<IconUploadResponse>),
        (status = 400, description = "No `file` field", body = ApiResponse<EmptyData>)
    )
)]
pub async fn upload_icon(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<IconUploadResponse>>, ApiError> {
    let bad_multipart = |e: axum::extract::multipart::MultipartError| {
        ApiError::BadRequest(format!("Invalid multipart body: {}", e))
    };
    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        if field.name() != Some("file") {
            continue;
        }
        let original_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(bad_multipart)?;
        let path = state.tariffs.upload_icon(&original_name, &bytes).await?;
        return Ok(Json(ApiResponse::success(IconUploadResponse { path })));
    }
    Err(ApiError::BadRequest(
        "multipart field `file` is required".into(),
    ))
}

#[utoipa::path(
    delete,
    path = "/icon",
    tag = "Icons",
    request_body = IdRequest,
    responses(
        (status = 200, description = "Icon row and file removed", body = ApiResponse<EmptyData>),
        (status = 404, description = "Icon not found", body = ApiResponse<EmptyData>),
        (status = 500, description = "Row removed but the file could not be", body = ApiResponse<EmptyData>)
    )
)]
pub async fn delete_icon(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<IdRequest>,
) -> Ack {
    state.tariffs.remove_icon(req.id).await?;
    ack()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Uri;

    fn query(uri: &str) -> Result<Query<TariffsQuery>, QueryRejection> {
        Query::try_from_uri(&uri.parse::<Uri>().unwrap())
    }

    #[test]
    fn city_id_from_query_string() {
        assert_eq!(resolve_city_id(query("/tariffs?city_id=5"), b"").unwrap(), 5);
    }

    #[test]
    fn city_id_from_json_body() {
        let id = resolve_city_id(query("/tariffs"), br#"{"city_id": 9}"#).unwrap();
        assert_eq!(id, 9);
    }

    #[test]
    fn query_string_wins_over_body() {
        let id = resolve_city_id(query("/tariffs?city_id=1"), br#"{"city_id": 2}"#).unwrap();
        assert_eq!(id, 1);
    }

    #[test]
    fn missing_city_id_is_bad_request() {
        assert!(matches!(
            resolve_city_id(query("/tariffs"), b"  "),
            Err(ApiError::BadRequest(_))
        ));
        assert!(matches!(
            resolve_city_id(query("/tariffs"), b"{}"),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn non_numeric_city_id_is_bad_request() {
        assert!(matches!(
            resolve_city_id(query("/tariffs?city_id=abc"), b""),
            Err(ApiError::BadRequest(_))
        ));
    }
}
