//! City repository interface

use async_trait::async_trait;

use super::model::{City, CityTariff, NewCity};
use crate::domain::DomainResult;

#[async_trait]
pub trait CityRepository: Send + Sync {
    async fn list_cities(&self) -> DomainResult<Vec<City>>;
    async fn add_city(&self, city: NewCity) -> DomainResult<()>;
    /// Deleting a city that does not exist succeeds.
    async fn remove_city(&self, id: i32) -> DomainResult<()>;
    /// Deleting a link that does not exist succeeds.
    async fn remove_city_tariff(&self, link: CityTariff) -> DomainResult<()>;
}
