//! # Tariff Catalog
//!
//! CRUD service for cities, tariffs, tariff-types, types and icons.
//!
//! ## Architecture
//!
//! - **domain**: catalog entities, repository traits and the icon storage port
//! - **application**: use-cases, each bounded by a deadline
//! - **infrastructure**: SeaORM repositories, migrations, icon files, shutdown
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: error taxonomy and the fan-out helper

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};
pub use infrastructure::{init_database_with_migrations, DatabaseConfig, SeaOrmRepositoryProvider};
pub use interfaces::http::create_router;
