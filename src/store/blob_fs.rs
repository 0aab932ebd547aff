//! Filesystem-backed blob store
//!
//! Each blob is one file at `<root>/<key>`: a big-endian `u32` header length,
//! a JSON header carrying the metadata, then the body bytes. The whole file is
//! written to a temp file and installed with a single rename, so a reader
//! always sees the body together with the metadata it was uploaded with.

use actix_web::web::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::{
    api::error,
    store::blob::{BlobMetadata, BlobStore, StoredBlob},
};

const HEADER_LEN_BYTES: usize = 4;

#[derive(Debug, Serialize, Deserialize)]
struct BlobHeader {
    content_type: Option<String>,
    size: u64,
    stored_at: DateTime<Utc>,
}

impl BlobHeader {
    fn encode(&self, body: &[u8]) -> Result<Vec<u8>, error::SystemError> {
        let header = serde_json::to_vec(self)?;
        let header_len = u32::try_from(header.len())
            .map_err(|_| std::io::Error::new(ErrorKind::InvalidInput, "blob header too large"))?;

        let mut file = Vec::with_capacity(HEADER_LEN_BYTES + header.len() + body.len());
        file.extend_from_slice(&header_len.to_be_bytes());
        file.extend_from_slice(&header);
        file.extend_from_slice(body);
        Ok(file)
    }

    /// Splits a stored file back into its header and body.
    fn decode(key: &str, mut raw: Bytes) -> Result<(Self, Bytes), error::SystemError> {
        let corrupt = || error::SystemError::CorruptBlob(key.to_owned());

        if raw.len() < HEADER_LEN_BYTES {
            return Err(corrupt());
        }
        let mut len_bytes = [0u8; HEADER_LEN_BYTES];
        len_bytes.copy_from_slice(&raw[..HEADER_LEN_BYTES]);
        let header_len = u32::from_be_bytes(len_bytes) as usize;

        let rest = raw.split_off(HEADER_LEN_BYTES);
        if rest.len() < header_len {
            return Err(corrupt());
        }
        let header: Self = serde_json::from_slice(&rest[..header_len]).map_err(|_| corrupt())?;
        let body = rest.slice(header_len..);
        if body.len() as u64 != header.size {
            return Err(corrupt());
        }
        Ok((header, body))
    }
}

#[derive(Clone)]
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create the root directory if needed
    pub async fn initialize(&self) -> Result<(), error::SystemError> {
        fs::create_dir_all(&self.root).await?;
        log::info!("Blob store initialized at: {:?}", self.root);
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    async fn write_atomic(&self, path: &Path, data: &[u8]) -> Result<(), error::SystemError> {
        // Leading dot keeps temp files outside the valid key space
        let temp_path = self.root.join(format!(".{}.tmp", Uuid::now_v7()));

        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(data).await?;
        file.sync_all().await?;
        drop(file);

        if let Err(e) = fs::rename(&temp_path, path).await {
            fs::remove_file(&temp_path).await.ok();
            return Err(e.into());
        }
        Ok(())
    }
}

/// Keys map straight to file names, so anything that could escape the root
/// or collide with a temp file is refused.
fn validate_key(key: &str) -> Result<(), error::SystemError> {
    let invalid = key.is_empty() || key.starts_with('.') || key.contains(['/', '\\', '\0']);

    if invalid {
        return Err(error::SystemError::InvalidKey(key.to_owned()));
    }
    Ok(())
}

#[async_trait::async_trait]
impl BlobStore for FsBlobStore {
    async fn put(
        &self,
        key: &str,
        body: Bytes,
        metadata: BlobMetadata,
    ) -> Result<(), error::SystemError> {
        validate_key(key)?;

        let header = BlobHeader {
            content_type: metadata.content_type,
            size: body.len() as u64,
            stored_at: Utc::now(),
        };
        self.write_atomic(&self.blob_path(key), &header.encode(&body)?).await?;

        log::debug!("Wrote blob: {} ({} bytes)", key, body.len());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<StoredBlob>, error::SystemError> {
        // Nothing can have been stored under an invalid key
        if validate_key(key).is_err() {
            return Ok(None);
        }

        let raw = match fs::read(self.blob_path(key)).await {
            Ok(bytes) => Bytes::from(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let (header, body) = BlobHeader::decode(key, raw)?;

        log::debug!("Read blob: {} ({} bytes, stored {})", key, body.len(), header.stored_at);
        Ok(Some(StoredBlob { body, metadata: BlobMetadata { content_type: header.content_type } }))
    }
}
