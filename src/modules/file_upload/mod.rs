pub mod handle;
pub mod model;
pub mod route;
pub mod schema;

pub use handle::{download_file, upload_file};
pub use model::UploadedFile;
pub use schema::FileUploadResponse;
