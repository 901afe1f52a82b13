//! Shared handler state

use std::sync::Arc;
use std::time::Instant;

use sea_orm::DatabaseConnection;

use crate::application::{CityService, TariffService};

#[derive(Clone)]
pub struct AppState {
    pub cities: Arc<CityService>,
    pub tariffs: Arc<TariffService>,
    /// Pinged by the health check
    pub db: DatabaseConnection,
    pub started_at: Instant,
}
