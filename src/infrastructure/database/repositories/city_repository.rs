//! SeaORM implementation of CityRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use tracing::{debug, info};

use super::db_errors::db_err;
use crate::domain::city::{City, CityRepository, CityTariff, NewCity};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::{city, city_tariff};

pub struct SeaOrmCityRepository {
    db: DatabaseConnection,
}

impl SeaOrmCityRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn entity_to_domain(c: city::Model) -> City {
    City {
        id: c.id,
        name: c.name,
    }
}

#[async_trait]
impl CityRepository for SeaOrmCityRepository {
    async fn list_cities(&self) -> DomainResult<Vec<City>> {
        let models = city::Entity::find()
            .order_by_asc(city::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn add_city(&self, c: NewCity) -> DomainResult<()> {
        let model = city::ActiveModel {
            id: NotSet,
            name: Set(c.name.clone()),
        };
        let result = city::Entity::insert(model)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        info!(city_id = result.last_insert_id, name = %c.name, "City added");
        Ok(())
    }

    async fn remove_city(&self, id: i32) -> DomainResult<()> {
        let result = city::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        debug!(city_id = id, rows = result.rows_affected, "City removed");
        Ok(())
    }

    async fn remove_city_tariff(&self, link: CityTariff) -> DomainResult<()> {
        let result = city_tariff::Entity::delete_many()
            .filter(city_tariff::Column::CityId.eq(link.city_id))
            .filter(city_tariff::Column::TariffId.eq(link.tariff_id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        debug!(
            city_id = link.city_id,
            tariff_id = link.tariff_id,
            rows = result.rows_affected,
            "City tariff link removed"
        );
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::test_utils::{insert_tariff_for_city, setup_test_db};

    async fn repo() -> SeaOrmCityRepository {
        SeaOrmCityRepository::new(setup_test_db().await)
    }

    #[tokio::test]
    async fn added_cities_are_listed_once() {
        let repo = repo().await;
        repo.add_city(NewCity { name: "Moscow".into() }).await.unwrap();
        repo.add_city(NewCity { name: "Kazan".into() }).await.unwrap();

        let cities = repo.list_cities().await.unwrap();
        let names: Vec<&str> = cities.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Moscow", "Kazan"]);
    }

    #[tokio::test]
    async fn empty_listing_is_empty_vec() {
        let repo = repo().await;
        assert!(repo.list_cities().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn same_name_gets_a_second_row() {
        let repo = repo().await;
        repo.add_city(NewCity { name: "Omsk".into() }).await.unwrap();
        repo.add_city(NewCity { name: "Omsk".into() }).await.unwrap();

        let cities = repo.list_cities().await.unwrap();
        assert_eq!(cities.len(), 2);
        assert_ne!(cities[0].id, cities[1].id);
    }

    #[tokio::test]
    async fn removing_missing_city_succeeds() {
        let repo = repo().await;
        repo.remove_city(999).await.unwrap();
    }

    #[tokio::test]
    async fn remove_city_deletes_row() {
        let repo = repo().await;
        repo.add_city(NewCity { name: "Tver".into() }).await.unwrap();
        let id = repo.list_cities().await.unwrap()[0].id;

        repo.remove_city(id).await.unwrap();
        assert!(repo.list_cities().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn removing_missing_link_succeeds() {
        let repo = repo().await;
        repo.remove_city_tariff(CityTariff {
            city_id: 1,
            tariff_id: 2,
        })
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn remove_city_tariff_deletes_only_that_link() {
        let db = setup_test_db().await;
        let repo = SeaOrmCityRepository::new(db.clone());
        repo.add_city(NewCity { name: "Perm".into() }).await.unwrap();
        let city_id = repo.list_cities().await.unwrap()[0].id;
        let first = insert_tariff_for_city(&db, city_id, "First").await;
        let second = insert_tariff_for_city(&db, city_id, "Second").await;

        repo.remove_city_tariff(CityTariff {
            city_id,
            tariff_id: first,
        })
        .await
        .unwrap();

        let remaining = city_tariff::Entity::find()
            .filter(city_tariff::Column::CityId.eq(city_id))
            .all(&db)
            .await
            .unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].tariff_id, second);
    }
}
