//! SeaORM implementation of RepositoryProvider

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::domain::city::CityRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::tariff::TariffRepository;

use super::city_repository::SeaOrmCityRepository;
use super::tariff_repository::SeaOrmTariffRepository;

/// Repository provider backed by one SeaORM connection pool.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let cities = repos.cities().list_cities().await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    cities: Arc<SeaOrmCityRepository>,
    tariffs: Arc<SeaOrmTariffRepository>,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            cities: Arc::new(SeaOrmCityRepository::new(db.clone())),
            tariffs: Arc::new(SeaOrmTariffRepository::new(db)),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn cities(&self) -> Arc<dyn CityRepository> {
        self.cities.clone()
    }

    fn tariffs(&self) -> Arc<dyn TariffRepository> {
        self.tariffs.clone()
    }
}
