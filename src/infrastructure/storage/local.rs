//! Icon files on the local filesystem

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{error, info};
use uuid::Uuid;

use crate::domain::{DomainError, DomainResult, IconStorage};

/// Stores uploads in `<static_dir>/icons`, served under `/assets/icons`.
pub struct LocalIconStorage {
    icons_dir: PathBuf,
    public_url: String,
}

impl LocalIconStorage {
    pub fn new(static_dir: impl AsRef<Path>, public_url: &str) -> Self {
        Self {
            icons_dir: static_dir.as_ref().join("icons"),
            public_url: public_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn icons_dir(&self) -> &Path {
        &self.icons_dir
    }

    /// Create the icons directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.icons_dir).await
    }

    fn file_path(&self, filename: &str) -> DomainResult<PathBuf> {
        if filename.is_empty() || filename == "." || filename == ".." || filename.contains(['/', '\\'])
        {
            return Err(DomainError::internal(format!(
                "invalid icon filename: {:?}",
                filename
            )));
        }
        Ok(self.icons_dir.join(filename))
    }
}

/// `<uuid>.<ext>`, or a bare uuid when the upload had no extension.
pub(crate) fn unique_filename(original_name: &str) -> String {
    let id = Uuid::new_v4();
    match Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty())
    {
        Some(ext) => format!("{}.{}", id, ext),
        None => id.to_string(),
    }
}

fn io_err(action: &str, path: &Path, e: std::io::Error) -> DomainError {
    error!(path = %path.display(), error = %e, "Icon file {} failed", action);
    DomainError::internal(format!("icon file {}: {}", action, e))
}

#[async_trait]
impl IconStorage for LocalIconStorage {
    async fn save(&self, original_name: &str, bytes: &[u8]) -> DomainResult<String> {
        self.ensure_dir()
            .await
            .map_err(|e| io_err("directory create", &self.icons_dir, e))?;
        let filename = unique_filename(original_name);
        let path = self.file_path(&filename)?;
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| io_err("write", &path, e))?;
        info!(file = %filename, size = bytes.len(), "Icon file stored");
        Ok(filename)
    }

    async fn remove(&self, filename: &str) -> DomainResult<()> {
        let path = self.file_path(filename)?;
        tokio::fs::remove_file(&path)
            .await
            .map_err(|e| io_err("remove", &path, e))?;
        info!(file = %filename, "Icon file removed");
        Ok(())
    }

    fn public_path(&self, filename: &str) -> String {
        format!("{}/assets/icons/{}", self.public_url, filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_filename_keeps_extension() {
        let name = unique_filename("logo.PNG");
        assert!(name.ends_with(".PNG"));
        assert_eq!(name.len(), 36 + 4);
        assert_ne!(unique_filename("logo.png"), unique_filename("logo.png"));
    }

    #[test]
    fn unique_filename_without_extension_is_bare_uuid() {
        assert_eq!(unique_filename("README").len(), 36);
    }

    #[test]
    fn public_path_uses_assets_prefix() {
        let storage = LocalIconStorage::new("/tmp/static", "http://localhost:8080/");
        assert_eq!(
            storage.public_path("a.svg"),
            "http://localhost:8080/assets/icons/a.svg"
        );
    }

    #[tokio::test]
    async fn save_then_remove_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalIconStorage::new(dir.path(), "http://localhost");

        let filename = storage.save("wifi.svg", b"<svg/>").await.unwrap();
        let on_disk = dir.path().join("icons").join(&filename);
        assert_eq!(tokio::fs::read(&on_disk).await.unwrap(), b"<svg/>");

        storage.remove(&filename).await.unwrap();
        assert!(!on_disk.exists());
    }

    #[tokio::test]
    async fn removing_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalIconStorage::new(dir.path(), "http://localhost");
        let err = storage.remove("gone.png").await.unwrap_err();
        assert!(matches!(err, DomainError::Internal(_)));
    }

    #[tokio::test]
    async fn traversal_names_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalIconStorage::new(dir.path(), "http://localhost");
        assert!(storage.remove("..").await.is_err());
        assert!(storage.remove("../secret").await.is_err());
    }
}
