//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod city_repository;
mod db_errors;
pub mod repository_provider;
pub mod tariff_repository;

pub use city_repository::SeaOrmCityRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
pub use tariff_repository::SeaOrmTariffRepository;
