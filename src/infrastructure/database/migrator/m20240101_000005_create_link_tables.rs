//! Create t_city_tariff and t_tariff_type_tariff link tables

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_cities::TCity;
use super::m20240101_000003_create_tariffs::TTariff;
use super::m20240101_000004_create_tariff_types::TTariffType;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TCityTariff::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(TCityTariff::CityId).integer().not_null())
                    .col(ColumnDef::new(TCityTariff::TariffId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(TCityTariff::CityId)
                            .col(TCityTariff::TariffId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_city_tariff_city")
                            .from(TCityTariff::Table, TCityTariff::CityId)
                            .to(TCity::Table, TCity::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_city_tariff_tariff")
                            .from(TCityTariff::Table, TCityTariff::TariffId)
                            .to(TTariff::Table, TTariff::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TTariffTypeTariff::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TTariffTypeTariff::TariffId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TTariffTypeTariff::TariffTypeId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(TTariffTypeTariff::TariffId)
                            .col(TTariffTypeTariff::TariffTypeId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tariff_type_tariff_tariff")
                            .from(TTariffTypeTariff::Table, TTariffTypeTariff::TariffId)
                            .to(TTariff::Table, TTariff::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tariff_type_tariff_type")
                            .from(TTariffTypeTariff::Table, TTariffTypeTariff::TariffTypeId)
                            .to(TTariffType::Table, TTariffType::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TTariffTypeTariff::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TCityTariff::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum TCityTariff {
    Table,
    CityId,
    TariffId,
}

#[derive(Iden)]
pub enum TTariffTypeTariff {
    Table,
    TariffId,
    TariffTypeId,
}
