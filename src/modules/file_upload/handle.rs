use actix_multipart::Multipart;
use actix_web::{error::PayloadError, http::StatusCode, web::Bytes};
use futures_util::{stream, TryStreamExt};
use std::sync::Arc;

use crate::api::response::{Response, OCTET_STREAM};
use crate::api::{error, success::Success};
use crate::modules::file_upload::{
    model::{UploadedFile, FILE_FIELD, FILE_NOT_FOUND, NO_FILE_UPLOADED},
    schema::FileUploadResponse,
};
use crate::router::Request;
use crate::store::{BlobMetadata, BlobStore};

/// Upload file handler
pub async fn upload_file(
    req: Request,
    blobs: Arc<dyn BlobStore>,
) -> Result<Response, error::Error> {
    let file = read_file_field(&req)
        .await?
        .ok_or_else(|| error::SystemError::bad_request(NO_FILE_UPLOADED))?;

    let size = file.bytes.len();
    blobs
        .put(&file.filename, file.bytes, BlobMetadata { content_type: file.content_type })
        .await?;
    log::info!("Stored upload {:?} ({} bytes)", file.filename, size);

    let body = FileUploadResponse { success: true, filename: file.filename };
    Ok(Success::ok(body).into_response()?)
}

/// Download file handler
pub async fn download_file(
    req: Request,
    blobs: Arc<dyn BlobStore>,
) -> Result<Response, error::Error> {
    let filename = req.param("filename").ok_or_else(|| error::Error::not_found(FILE_NOT_FOUND))?;

    let blob = blobs.get(filename).await?.ok_or_else(|| error::Error::not_found(FILE_NOT_FOUND))?;

    let content_type = blob.metadata.content_type.as_deref().unwrap_or(OCTET_STREAM);
    Ok(Response::new(StatusCode::OK).with_content_type(content_type).with_body(blob.body))
}

/// Finds the `file` field of a multipart body and reads it fully into memory.
///
/// A `file` field without a filename (a plain text input, or a file input
/// left empty by the browser) does not count as an upload.
async fn read_file_field(req: &Request) -> Result<Option<UploadedFile>, error::SystemError> {
    let body = req.body().clone();
    let mut payload =
        Multipart::new(req.headers(), stream::once(async move { Ok::<_, PayloadError>(body) }));

    while let Some(mut field) = payload.try_next().await? {
        let (name, filename) = match field.content_disposition() {
            Some(cd) => (cd.get_name().map(str::to_owned), cd.get_filename().map(str::to_owned)),
            None => (None, None),
        };

        let filename = match filename {
            Some(filename) if name.as_deref() == Some(FILE_FIELD) && !filename.is_empty() => {
                filename
            }
            _ => {
                // Skip over fields we don't care about
                while field.try_next().await?.is_some() {}
                continue;
            }
        };

        let content_type = field.content_type().map(|m| m.to_string());

        let mut bytes = Vec::new();
        while let Some(chunk) = field.try_next().await? {
            bytes.extend_from_slice(&chunk);
        }

        return Ok(Some(UploadedFile { filename, content_type, bytes: Bytes::from(bytes) }));
    }

    Ok(None)
}
