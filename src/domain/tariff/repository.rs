//! Tariff catalog repository interface

use async_trait::async_trait;

use super::model::{Icon, NewIcon, NewTariff, NewTariffType, NewType, Tariff, TariffType, Type};
use crate::domain::DomainResult;

#[async_trait]
pub trait TariffRepository: Send + Sync {
    async fn list_types(&self) -> DomainResult<Vec<Type>>;
    async fn list_tariff_types(&self) -> DomainResult<Vec<TariffType>>;
    /// Tariffs linked to `city_id`, each with its tariff-types populated.
    async fn list_tariffs(&self, city_id: i32) -> DomainResult<Vec<Tariff>>;
    async fn list_icons(&self) -> DomainResult<Vec<Icon>>;

    async fn add_type(&self, kind: NewType) -> DomainResult<()>;
    async fn remove_type(&self, id: i32) -> DomainResult<()>;

    async fn add_tariff_type(&self, tariff_type: NewTariffType) -> DomainResult<()>;
    async fn remove_tariff_type(&self, id: i32) -> DomainResult<()>;

    /// Inserts the tariff, then its type links, then its city link.
    /// Steps are not atomic: a later failure leaves earlier rows in place.
    async fn add_tariff(&self, tariff: NewTariff) -> DomainResult<()>;
    async fn remove_tariff(&self, id: i32) -> DomainResult<()>;

    async fn add_icon(&self, icon: NewIcon) -> DomainResult<()>;
    /// Deletes the icon row and returns the stored path.
    async fn remove_icon(&self, id: i32) -> DomainResult<String>;
}
