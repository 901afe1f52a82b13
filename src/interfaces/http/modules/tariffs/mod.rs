//! Tariff catalog module: types, icons, tariff-types, tariffs

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
