//! Tariff catalog use-cases: types, icons, tariff-types and tariffs

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use super::deadline::{deadline_exceeded, with_deadline};
use crate::domain::{
    DomainResult, Icon, IconStorage, NewIcon, NewTariff, NewTariffType, NewType, Tariff,
    TariffRepository, TariffType, Type,
};

pub struct TariffService {
    repo: Arc<dyn TariffRepository>,
    icons: Arc<dyn IconStorage>,
    timeout: Duration,
}

/// Last `/`-separated segment of a stored icon path.
fn icon_filename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

impl TariffService {
    pub fn new(
        repo: Arc<dyn TariffRepository>,
        icons: Arc<dyn IconStorage>,
        timeout: Duration,
    ) -> Self {
        Self {
            repo,
            icons,
            timeout,
        }
    }

    // ── Types ───────────────────────────────────────────────────

    pub async fn list_types(&self) -> DomainResult<Vec<Type>> {
        with_deadline(self.timeout, "list_types", self.repo.list_types()).await
    }

    pub async fn add_type(&self, kind: NewType) -> DomainResult<()> {
        with_deadline(self.timeout, "add_type", self.repo.add_type(kind)).await
    }

    pub async fn remove_type(&self, id: i32) -> DomainResult<()> {
        with_deadline(self.timeout, "remove_type", self.repo.remove_type(id)).await
    }

    // ── Tariff-types ────────────────────────────────────────────

    pub async fn list_tariff_types(&self) -> DomainResult<Vec<TariffType>> {
        with_deadline(
            self.timeout,
            "list_tariff_types",
            self.repo.list_tariff_types(),
        )
        .await
    }

    pub async fn add_tariff_type(&self, tariff_type: NewTariffType) -> DomainResult<()> {
        with_deadline(
            self.timeout,
            "add_tariff_type",
            self.repo.add_tariff_type(tariff_type),
        )
        .await
    }

    pub async fn remove_tariff_type(&self, id: i32) -> DomainResult<()> {
        with_deadline(
            self.timeout,
            "remove_tariff_type",
            self.repo.remove_tariff_type(id),
        )
        .await
    }

    // ── Tariffs ─────────────────────────────────────────────────

    pub async fn list_tariffs(&self, city_id: i32) -> DomainResult<Vec<Tariff>> {
        with_deadline(self.timeout, "list_tariffs", self.repo.list_tariffs(city_id)).await
    }

    pub async fn add_tariff(&self, tariff: NewTariff) -> DomainResult<()> {
        with_deadline(self.timeout, "add_tariff", self.repo.add_tariff(tariff)).await
    }

    pub async fn remove_tariff(&self, id: i32) -> DomainResult<()> {
        with_deadline(self.timeout, "remove_tariff", self.repo.remove_tariff(id)).await
    }

    // ── Icons ───────────────────────────────────────────────────

    pub async fn list_icons(&self) -> DomainResult<Vec<Icon>> {
        with_deadline(self.timeout, "list_icons", self.repo.list_icons()).await
    }

    pub async fn add_icon(&self, icon: NewIcon) -> DomainResult<()> {
        with_deadline(self.timeout, "add_icon", self.repo.add_icon(icon)).await
    }

    /// Store an uploaded image and register it. Returns the public path.
    pub async fn upload_icon(&self, original_name: &str, bytes: &[u8]) -> DomainResult<String> {
        let filename = self.icons.save(original_name, bytes).await?;
        let path = self.icons.public_path(&filename);
        let insert = self.repo.add_icon(NewIcon { path: path.clone() });
        match tokio::time::timeout(self.timeout, insert).await {
            Ok(Ok(())) => {
                info!(path = %path, "Icon uploaded");
                Ok(path)
            }
            Ok(Err(e)) => {
                if let Err(cleanup) = self.icons.remove(&filename).await {
                    warn!(file = %filename, error = %cleanup, "Orphaned icon file left behind");
                }
                Err(e)
            }
            // The row may have been committed, so the file stays.
            Err(_) => {
                warn!(file = %filename, "Icon row state unknown after deadline, file kept");
                Err(deadline_exceeded("add_icon", self.timeout))
            }
        }
    }

    /// Delete the icon row, then its file. A missing file is reported after
    /// the row is already gone.
    pub async fn remove_icon(&self, id: i32) -> DomainResult<()> {
        let path = with_deadline(self.timeout, "remove_icon", self.repo.remove_icon(id)).await?;
        self.icons.remove(icon_filename(&path)).await
    }
}
