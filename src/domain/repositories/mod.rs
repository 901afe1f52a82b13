//! Repository access for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to the per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use std::sync::Arc;

use super::city::CityRepository;
use super::tariff::TariffRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// Services take the repository they need out of the provider once, at
/// construction time:
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let cities = CityService::new(repos.cities(), timeout);
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn cities(&self) -> Arc<dyn CityRepository>;
    fn tariffs(&self) -> Arc<dyn TariffRepository>;
}
