use actix_web::web::Bytes;

/// Name of the form field carrying the upload
pub const FILE_FIELD: &str = "file";
pub const NO_FILE_UPLOADED: &str = "No file uploaded";
pub const FILE_NOT_FOUND: &str = "File not found";

/// A file read out of a multipart form
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}
