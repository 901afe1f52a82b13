//! City entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "t_city")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::city_tariff::Entity")]
    CityTariff,
}

impl Related<super::city_tariff::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CityTariff.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
