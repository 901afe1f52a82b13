//! Tariff-type entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "t_tariff_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    /// JSON array of `{title, body}` objects
    #[sea_orm(column_type = "Text")]
    pub description: String,

    pub title: String,

    pub subtitle: String,

    #[sea_orm(column_name = "icon")]
    pub icon_id: i32,

    #[sea_orm(column_name = "type")]
    pub type_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::kind::Entity",
        from = "Column::TypeId",
        to = "super::kind::Column::Id"
    )]
    Kind,
    #[sea_orm(
        belongs_to = "super::icon::Entity",
        from = "Column::IconId",
        to = "super::icon::Column::Id"
    )]
    Icon,
    #[sea_orm(has_many = "super::tariff_type_tariff::Entity")]
    TariffTypeTariff,
}

impl Related<super::kind::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Kind.def()
    }
}

impl Related<super::icon::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Icon.def()
    }
}

impl Related<super::tariff_type_tariff::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TariffTypeTariff.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
