use std::sync::Arc;

use crate::modules::file_upload::handle::{download_file, upload_file};
use crate::router::{handler, PatternError, RouteTable};
use crate::store::BlobStore;

pub fn configure(table: &mut RouteTable, blobs: Arc<dyn BlobStore>) -> Result<(), PatternError> {
    let upload_blobs = Arc::clone(&blobs);
    table
        .post("/upload", handler(move |req| upload_file(req, Arc::clone(&upload_blobs))))?
        .get("/download/:filename", handler(move |req| download_file(req, Arc::clone(&blobs))))?;
    Ok(())
}
