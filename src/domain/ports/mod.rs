//! Ports: capabilities the domain needs from the outside world.

pub mod icon_storage;

pub use icon_storage::IconStorage;
