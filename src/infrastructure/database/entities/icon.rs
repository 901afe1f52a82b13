//! Icon entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "t_icon")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Public URL of the uploaded image
    pub path: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tariff_type::Entity")]
    TariffType,
}

impl Related<super::tariff_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TariffType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
