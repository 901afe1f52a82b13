//! Tariff entity

use sea_orm::entity::prelude::*;

/// Tariff row. Type and city associations live in the link tables.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "t_tariff")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub price: f64,

    /// Billing period, e.g. "month"
    pub period_per_pay: String,

    pub title: String,

    pub subtitle: String,

    pub short_description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::city_tariff::Entity")]
    CityTariff,
    #[sea_orm(has_many = "super::tariff_type_tariff::Entity")]
    TariffTypeTariff,
}

impl Related<super::city_tariff::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CityTariff.def()
    }
}

impl Related<super::tariff_type_tariff::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TariffTypeTariff.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
