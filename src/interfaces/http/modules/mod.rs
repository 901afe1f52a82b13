//! Route modules, one per resource family

pub mod cities;
pub mod health;
pub mod tariffs;
