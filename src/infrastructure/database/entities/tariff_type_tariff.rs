//! Tariff ↔ tariff-type link entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "t_tariff_type_tariff")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub tariff_id: i32,

    #[sea_orm(primary_key, auto_increment = false)]
    pub tariff_type_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tariff::Entity",
        from = "Column::TariffId",
        to = "super::tariff::Column::Id"
    )]
    Tariff,
    #[sea_orm(
        belongs_to = "super::tariff_type::Entity",
        from = "Column::TariffTypeId",
        to = "super::tariff_type::Column::Id"
    )]
    TariffType,
}

impl Related<super::tariff::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tariff.def()
    }
}

impl Related<super::tariff_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TariffType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
