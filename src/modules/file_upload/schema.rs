use serde::{Deserialize, Serialize};

/// Body of a successful upload
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileUploadResponse {
    pub success: bool,
    pub filename: String,
}
