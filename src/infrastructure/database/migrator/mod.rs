//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_cities;
mod m20240101_000002_create_types_and_icons;
mod m20240101_000003_create_tariffs;
mod m20240101_000004_create_tariff_types;
mod m20240101_000005_create_link_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_cities::Migration),
            Box::new(m20240101_000002_create_types_and_icons::Migration),
            Box::new(m20240101_000003_create_tariffs::Migration),
            Box::new(m20240101_000004_create_tariff_types::Migration),
            Box::new(m20240101_000005_create_link_tables::Migration),
        ]
    }
}
