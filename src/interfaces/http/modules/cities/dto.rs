//! City DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{City, CityTariff, NewCity};

/// Город
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CityDto {
    pub id: i32,
    pub name: String,
}

impl From<City> for CityDto {
    fn from(c: City) -> Self {
        Self {
            id: c.id,
            name: c.name,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCityRequest {
    #[validate(length(min = 1, message = "city name is required"))]
    pub name: String,
}

impl From<CreateCityRequest> for NewCity {
    fn from(r: CreateCityRequest) -> Self {
        Self { name: r.name }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DeleteCityRequest {
    pub id: i32,
}

/// Связь города и тарифа
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CityTariffRequest {
    pub city_id: i32,
    pub tariff_id: i32,
}

impl From<CityTariffRequest> for CityTariff {
    fn from(r: CityTariffRequest) -> Self {
        Self {
            city_id: r.city_id,
            tariff_id: r.tariff_id,
        }
    }
}
