//! Create t_tariff table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TTariff::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TTariff::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TTariff::Price)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(TTariff::PeriodPerPay)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(TTariff::Title).string().not_null().default(""))
                    .col(
                        ColumnDef::new(TTariff::Subtitle)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(TTariff::ShortDescription)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TTariff::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum TTariff {
    Table,
    Id,
    Price,
    PeriodPerPay,
    Title,
    Subtitle,
    ShortDescription,
}
