//! Domain layer: catalog entities, repository contracts and ports.

pub mod city;
pub mod ports;
pub mod repositories;
pub mod tariff;

pub use city::{City, CityRepository, CityTariff, NewCity};
pub use ports::IconStorage;
pub use repositories::{DomainResult, RepositoryProvider};
pub use tariff::{
    Description, Icon, NewIcon, NewTariff, NewTariffType, NewType, Tariff, TariffRepository,
    TariffType, Type,
};

pub use crate::shared::errors::DomainError;
