use std::sync::Arc;

use crate::router::{handler, Dispatcher, PatternError, RouteTable};
use crate::store::{BlobStore, QueryExecutor};

pub mod system {
    pub mod handle;
    pub mod route;
    pub mod schema;
}

pub mod user {
    pub mod handle;
    pub mod route;
    pub mod schema;
}

pub mod file_upload;

/// Registers every route in priority order and seals the table with the
/// not-found fallback.
pub fn dispatcher(
    db: Arc<dyn QueryExecutor>,
    blobs: Arc<dyn BlobStore>,
) -> Result<Dispatcher, PatternError> {
    let mut table = RouteTable::new();

    system::route::configure(&mut table)?;
    user::route::configure(&mut table, db)?;
    file_upload::route::configure(&mut table, blobs)?;

    Ok(table.fallback(handler(system::handle::not_found)))
}
