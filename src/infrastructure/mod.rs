//! Infrastructure layer - external concerns

pub mod database;
pub mod server;
pub mod storage;

pub use database::repositories::SeaOrmRepositoryProvider;
pub use database::{init_database, init_database_with_migrations, DatabaseConfig};
pub use server::{ShutdownCoordinator, ShutdownSignal};
pub use storage::{InMemoryIconStorage, InMemoryRepositoryProvider, LocalIconStorage};
