//! Database entities module

pub mod city;
pub mod city_tariff;
pub mod icon;
pub mod kind;
pub mod tariff;
pub mod tariff_type;
pub mod tariff_type_tariff;

pub use city::Entity as City;
pub use city_tariff::Entity as CityTariff;
pub use icon::Entity as Icon;
pub use kind::Entity as Kind;
pub use tariff::Entity as Tariff;
pub use tariff_type::Entity as TariffType;
pub use tariff_type_tariff::Entity as TariffTypeTariff;
