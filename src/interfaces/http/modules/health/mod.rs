//! Service health

pub mod handlers;

pub use handlers::*;
