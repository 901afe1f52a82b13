//! City module: cities and their tariff links

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
