//! Icon file storage and the in-memory catalog

mod local;
mod memory;

pub use local::LocalIconStorage;
pub use memory::{InMemoryCatalog, InMemoryIconStorage, InMemoryRepositoryProvider};
