//! HTTP REST API interfaces
//!
//! - `common`: response envelope and the validating JSON extractor
//! - `modules`: handlers and DTOs per resource family
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod error;
pub mod modules;
pub mod router;
pub mod state;

pub use router::{create_router, ApiDoc};
pub use state::AppState;
