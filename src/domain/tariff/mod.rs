//! Tariff aggregate
//!
//! Tariffs, the tariff-types attached to them, type categories and icons.

pub mod model;
pub mod repository;

pub use model::{
    Description, Icon, NewIcon, NewTariff, NewTariffType, NewType, Tariff, TariffType, Type,
};
pub use repository::TariffRepository;
