use actix_web::web::Bytes;
use serde::{Deserialize, Serialize};

use crate::api::error;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobMetadata {
    pub content_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredBlob {
    pub body: Bytes,
    pub metadata: BlobMetadata,
}

/// Key-value store for file payloads. Writing an existing key replaces it.
#[async_trait::async_trait]
pub trait BlobStore: Send + Sync {
    async fn put(
        &self,
        key: &str,
        body: Bytes,
        metadata: BlobMetadata,
    ) -> Result<(), error::SystemError>;

    /// `Ok(None)` when nothing is stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<StoredBlob>, error::SystemError>;
}
