//! Create t_tariff_type table

use sea_orm_migration::prelude::*;

use super::m20240101_000002_create_types_and_icons::{TIcon, TType};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TTariffType::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TTariffType::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TTariffType::Name).string().not_null())
                    .col(
                        ColumnDef::new(TTariffType::Description)
                            .text()
                            .not_null()
                            .default("[]"),
                    )
                    .col(
                        ColumnDef::new(TTariffType::Title)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(TTariffType::Subtitle)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(TTariffType::Icon).integer().not_null())
                    .col(ColumnDef::new(TTariffType::Type).integer().not_null())
                    // No ON DELETE action: deleting a referenced type or icon
                    // fails with SQLITE_CONSTRAINT_FOREIGNKEY.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tariff_type_type")
                            .from(TTariffType::Table, TTariffType::Type)
                            .to(TType::Table, TType::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tariff_type_icon")
                            .from(TTariffType::Table, TTariffType::Icon)
                            .to(TIcon::Table, TIcon::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TTariffType::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum TTariffType {
    Table,
    Id,
    Name,
    Description,
    Title,
    Subtitle,
    Icon,
    Type,
}
