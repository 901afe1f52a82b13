//! City use-cases

use std::sync::Arc;
use std::time::Duration;

use super::deadline::with_deadline;
use crate::domain::{City, CityRepository, CityTariff, DomainResult, NewCity};

/// City operations, each bounded by the configured deadline
pub struct CityService {
    repo: Arc<dyn CityRepository>,
    timeout: Duration,
}

impl CityService {
    pub fn new(repo: Arc<dyn CityRepository>, timeout: Duration) -> Self {
        Self { repo, timeout }
    }

    pub async fn list_cities(&self) -> DomainResult<Vec<City>> {
        with_deadline(self.timeout, "list_cities", self.repo.list_cities()).await
    }

    pub async fn add_city(&self, city: NewCity) -> DomainResult<()> {
        with_deadline(self.timeout, "add_city", self.repo.add_city(city)).await
    }

    pub async fn remove_city(&self, id: i32) -> DomainResult<()> {
        with_deadline(self.timeout, "remove_city", self.repo.remove_city(id)).await
    }

    pub async fn remove_city_tariff(&self, link: CityTariff) -> DomainResult<()> {
        with_deadline(
            self.timeout,
            "remove_city_tariff",
            self.repo.remove_city_tariff(link),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainError, RepositoryProvider};
    use crate::infrastructure::InMemoryRepositoryProvider;
    use async_trait::async_trait;

    /// Slow listing, rejected inserts
    struct StubCities;

    #[async_trait]
    impl CityRepository for StubCities {
        async fn list_cities(&self) -> DomainResult<Vec<City>> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(Vec::new())
        }
        async fn add_city(&self, _city: NewCity) -> DomainResult<()> {
            Err(DomainError::Conflict("record already exists".into()))
        }
        async fn remove_city(&self, _id: i32) -> DomainResult<()> {
            Ok(())
        }
        async fn remove_city_tariff(&self, _link: CityTariff) -> DomainResult<()> {
            Ok(())
        }
    }

    fn service() -> CityService {
        CityService::new(
            InMemoryRepositoryProvider::new().cities(),
            Duration::from_secs(1),
        )
    }

    #[tokio::test]
    async fn add_then_list() {
        let svc = service();
        svc.add_city(NewCity {
            name: "Novosibirsk".into(),
        })
        .await
        .unwrap();
        let cities = svc.list_cities().await.unwrap();
        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].name, "Novosibirsk");
    }

    #[tokio::test]
    async fn repository_errors_pass_through_unchanged() {
        let svc = CityService::new(Arc::new(StubCities), Duration::from_secs(1));
        let err = svc
            .add_city(NewCity {
                name: "Irkutsk".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::Conflict("record already exists".into()));
    }

    #[tokio::test]
    async fn slow_store_hits_deadline() {
        let svc = CityService::new(Arc::new(StubCities), Duration::from_millis(20));
        let err = svc.list_cities().await.unwrap_err();
        assert!(matches!(err, DomainError::Internal(_)));
    }

    #[tokio::test]
    async fn removals_of_missing_rows_succeed() {
        let svc = service();
        svc.remove_city(12).await.unwrap();
        svc.remove_city_tariff(CityTariff {
            city_id: 12,
            tariff_id: 3,
        })
        .await
        .unwrap();
    }
}
