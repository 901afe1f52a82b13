//! Fixtures for repository tests: a migrated in-memory database and a few
//! raw inserts that bypass the repositories.

use sea_orm::{ActiveValue::NotSet, DatabaseConnection, EntityTrait, Set};

use super::entities::{city, city_tariff, icon, kind, tariff};
use super::{init_database_with_migrations, DatabaseConfig};

pub async fn setup_test_db() -> DatabaseConnection {
    init_database_with_migrations(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory database")
}

/// Inserts the type "Internet" and one icon; returns `(type_id, icon_id)`.
pub async fn seed_type_and_icon(db: &DatabaseConnection) -> (i32, i32) {
    let type_id = kind::Entity::insert(kind::ActiveModel {
        id: NotSet,
        name: Set("Internet".into()),
    })
    .exec(db)
    .await
    .expect("insert type")
    .last_insert_id;
    let icon_id = icon::Entity::insert(icon::ActiveModel {
        id: NotSet,
        path: Set("http://localhost/assets/icons/wifi.png".into()),
    })
    .exec(db)
    .await
    .expect("insert icon")
    .last_insert_id;
    (type_id, icon_id)
}

pub async fn insert_city(db: &DatabaseConnection, name: &str) -> i32 {
    city::Entity::insert(city::ActiveModel {
        id: NotSet,
        name: Set(name.into()),
    })
    .exec(db)
    .await
    .expect("insert city")
    .last_insert_id
}

/// Inserts a bare tariff linked to `city_id`; returns the tariff id.
pub async fn insert_tariff_for_city(db: &DatabaseConnection, city_id: i32, title: &str) -> i32 {
    let tariff_id = tariff::Entity::insert(tariff::ActiveModel {
        id: NotSet,
        price: Set(10.0),
        period_per_pay: Set("month".into()),
        title: Set(title.into()),
        subtitle: Set(String::new()),
        short_description: Set(String::new()),
    })
    .exec(db)
    .await
    .expect("insert tariff")
    .last_insert_id;
    city_tariff::Entity::insert(city_tariff::ActiveModel {
        city_id: Set(city_id),
        tariff_id: Set(tariff_id),
    })
    .exec_without_returning(db)
    .await
    .expect("insert city link");
    tariff_id
}
