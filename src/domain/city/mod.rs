//! City aggregate

pub mod model;
pub mod repository;

pub use model::{City, CityTariff, NewCity};
pub use repository::CityRepository;
