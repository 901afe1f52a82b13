//! Icon file storage port

use async_trait::async_trait;

use crate::domain::DomainResult;

/// Storage for uploaded icon images.
#[async_trait]
pub trait IconStorage: Send + Sync {
    /// Store `bytes` under a generated unique name keeping the extension of
    /// `original_name`. Returns the stored filename.
    async fn save(&self, original_name: &str, bytes: &[u8]) -> DomainResult<String>;

    /// Delete a previously stored file by filename.
    async fn remove(&self, filename: &str) -> DomainResult<()>;

    /// Public path clients use to fetch `filename`.
    fn public_path(&self, filename: &str) -> String;
}
