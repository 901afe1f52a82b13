//! Tariff catalog DTOs
//!
//! Field names follow the public wire format: catalog ids are `ID`, a
//! tariff-type's type and icon references are `type` and `icon`, a tariff's
//! tariff-types are `tariff_type`.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{
    Description, Icon, NewTariff, NewTariffType, NewType, Tariff, TariffType, Type,
};

/// Delete-by-id body shared by the catalog resources
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct IdRequest {
    #[serde(rename = "ID")]
    pub id: i32,
}

// ── Types ───────────────────────────────────────────────────────

/// Категория типа тарифа
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TypeDto {
    #[serde(rename = "ID")]
    pub id: i32,
    pub name: String,
}

impl From<Type> for TypeDto {
    fn from(t: Type) -> Self {
        Self {
            id: t.id,
            name: t.name,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTypeRequest {
    #[validate(length(min = 1, message = "type name is required"))]
    pub name: String,
}

impl From<CreateTypeRequest> for NewType {
    fn from(r: CreateTypeRequest) -> Self {
        Self { name: r.name }
    }
}

// ── Icons ───────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IconDto {
    #[serde(rename = "ID")]
    pub id: i32,
    pub path: String,
}

impl From<Icon> for IconDto {
    fn from(i: Icon) -> Self {
        Self {
            id: i.id,
            path: i.path,
        }
    }
}

/// Multipart form of `POST /icon`
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct IconUploadForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IconUploadResponse {
    /// Public URL of the stored image
    pub path: String,
}

// ── Tariff-types ────────────────────────────────────────────────

/// Локализованное описание
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DescriptionDto {
    pub title: String,
    pub body: String,
}

impl From<Description> for DescriptionDto {
    fn from(d: Description) -> Self {
        Self {
            title: d.title,
            body: d.body,
        }
    }
}

impl From<DescriptionDto> for Description {
    fn from(d: DescriptionDto) -> Self {
        Self {
            title: d.title,
            body: d.body,
        }
    }
}

/// Тип тарифа с данными категории и иконки
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TariffTypeDto {
    #[serde(rename = "ID")]
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub type_id: i32,
    pub type_name: String,
    pub description: Vec<DescriptionDto>,
    pub title: String,
    pub subtitle: String,
    #[serde(rename = "icon")]
    pub icon_id: i32,
    pub icon_path: String,
}

impl From<TariffType> for TariffTypeDto {
    fn from(t: TariffType) -> Self {
        Self {
            id: t.id,
            name: t.name,
            type_id: t.type_id,
            type_name: t.type_name,
            description: t.description.into_iter().map(Into::into).collect(),
            title: t.title,
            subtitle: t.subtitle,
            icon_id: t.icon_id,
            icon_path: t.icon_path,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTariffTypeRequest {
    #[validate(length(min = 1, message = "tariff-type name is required"))]
    pub name: String,
    #[serde(rename = "type")]
    pub type_id: i32,
    #[serde(rename = "icon")]
    pub icon_id: i32,
    #[serde(default)]
    pub description: Vec<DescriptionDto>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
}

impl From<CreateTariffTypeRequest> for NewTariffType {
    fn from(r: CreateTariffTypeRequest) -> Self {
        Self {
            name: r.name,
            type_id: r.type_id,
            description: r.description.into_iter().map(Into::into).collect(),
            title: r.title,
            subtitle: r.subtitle,
            icon_id: r.icon_id,
        }
    }
}

// ── Tariffs ─────────────────────────────────────────────────────

/// Тариф с вложенными типами
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TariffDto {
    #[serde(rename = "ID")]
    pub id: i32,
    pub price: f64,
    pub period_per_pay: String,
    pub title: String,
    pub subtitle: String,
    pub short_description: String,
    pub tariff_type: Vec<TariffTypeDto>,
    pub city_id: i32,
}

impl From<Tariff> for TariffDto {
    fn from(t: Tariff) -> Self {
        Self {
            id: t.id,
            price: t.price,
            period_per_pay: t.period_per_pay,
            title: t.title,
            subtitle: t.subtitle,
            short_description: t.short_description,
            tariff_type: t.types.into_iter().map(Into::into).collect(),
            city_id: t.city_id,
        }
    }
}

/// Reference to an existing tariff-type; other fields are ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TariffTypeRef {
    #[serde(rename = "ID")]
    pub id: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTariffRequest {
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,
    #[validate(length(min = 1, message = "period_per_pay is required"))]
    pub period_per_pay: String,
    #[validate(length(min = 1, message = "tariff title is required"))]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub tariff_type: Vec<TariffTypeRef>,
    pub city_id: i32,
}

impl From<CreateTariffRequest> for NewTariff {
    fn from(r: CreateTariffRequest) -> Self {
        Self {
            price: r.price,
            period_per_pay: r.period_per_pay,
            title: r.title,
            subtitle: r.subtitle,
            short_description: r.short_description,
            type_ids: r.tariff_type.into_iter().map(|t| t.id).collect(),
            city_id: r.city_id,
        }
    }
}

/// `city_id` for `GET /tariffs`, from the query string or a JSON body
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct TariffsQuery {
    pub city_id: Option<i32>,
}
