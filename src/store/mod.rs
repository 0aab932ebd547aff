//! Clients for the two external stores the handlers depend on.

pub mod blob;
pub mod blob_fs;
pub mod query;
pub mod query_pg;

pub use blob::{BlobMetadata, BlobStore, StoredBlob};
pub use blob_fs::FsBlobStore;
pub use query::{QueryExecutor, Row, Statement};
pub use query_pg::PgQueryExecutor;
