//! Create t_type and t_icon tables

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TType::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TType::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TType::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TIcon::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TIcon::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TIcon::Path).string().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TIcon::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TType::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum TType {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
pub enum TIcon {
    Table,
    Id,
    Path,
}
