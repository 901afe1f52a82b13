//! Tariff Catalog server
//!
//! Reads configuration from TOML (~/.config/tariff-catalog/config.toml or
//! the file named by `TARIFF_CATALOG_CONFIG`).

use std::sync::Arc;
use std::time::Instant;

use tracing::{error, info};

use tariff_catalog::application::{CityService, TariffService};
use tariff_catalog::domain::RepositoryProvider;
use tariff_catalog::infrastructure::{LocalIconStorage, ShutdownCoordinator};
use tariff_catalog::interfaces::http::AppState;
use tariff_catalog::{
    create_router, default_config_path, init_database_with_migrations, AppConfig,
    SeaOrmRepositoryProvider,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("TARIFF_CATALOG_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let (app_cfg, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    let app_cfg = app_cfg.with_database_url(std::env::var("DATABASE_URL").ok());

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&app_cfg.logging.level)),
        )
        .init();
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => error!("Failed to load config: {}. Using defaults.", e),
    }

    info!("Starting Tariff Catalog...");

    // ── Database ───────────────────────────────────────────────
    let db = match init_database_with_migrations(&app_cfg.database_config()).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to initialize database: {}", e);
            return Err(e.into());
        }
    };
    let repos = SeaOrmRepositoryProvider::new(db.clone());

    // ── Icon storage ───────────────────────────────────────────
    let icons = LocalIconStorage::new(&app_cfg.storage.static_dir, &app_cfg.server.public_url);
    icons.ensure_dir().await?;
    info!(dir = %icons.icons_dir().display(), "Icon storage ready");

    // ── Services ───────────────────────────────────────────────
    let timeout = app_cfg.request_timeout();
    let state = AppState {
        cities: Arc::new(CityService::new(repos.cities(), timeout)),
        tariffs: Arc::new(TariffService::new(repos.tariffs(), Arc::new(icons), timeout)),
        db,
        started_at: Instant::now(),
    };
    let app = create_router(state, &app_cfg.storage.static_dir);

    // ── Serve ──────────────────────────────────────────────────
    let coordinator = ShutdownCoordinator::new(app_cfg.shutdown_timeout());
    coordinator.start_signal_listener();
    let shutdown = coordinator.signal();

    let addr = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("REST API listening on http://{}", addr);
    info!("Swagger UI at http://{}/docs", addr);

    let server = axum::serve(listener, app).with_graceful_shutdown(shutdown.notified());
    if !coordinator.run(server).await? {
        error!("Some requests were still running at shutdown");
    }

    info!("Tariff Catalog stopped");
    Ok(())
}
