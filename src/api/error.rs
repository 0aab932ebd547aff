use actix_multipart::MultipartError;
use std::borrow::Cow;

use crate::api::response::Response;

/// HTTP-facing error. Every handler failure ends up as one of these and is
/// shaped into a response in exactly one place (`From<Error> for Response`).
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Not Found: {0}")]
    NotFound(Cow<'static, str>),
    #[error("{0}")]
    Internal(Cow<'static, str>),
}

#[derive(serde::Serialize)]
pub struct ErrorBody {
    pub error: Cow<'static, str>,
}

impl Error {
    pub fn not_found(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn internal(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<Error> for Response {
    fn from(value: Error) -> Self {
        match value {
            // Not-found conditions carry no structured body
            Error::NotFound(msg) => Response::not_found(msg),
            Error::Internal(msg) => Response::internal_error(&ErrorBody { error: msg }),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SystemError {
    // sqlx errors
    #[error("{0}")]
    DatabaseError(Cow<'static, str>),
    // serde errors
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    // io errors
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    // multipart errors
    #[error("{0}")]
    MultipartError(Cow<'static, str>),
    // Custom Errors
    #[error("Invalid blob key: {0:?}")]
    InvalidKey(String),
    #[error("Corrupt blob {0:?}")]
    CorruptBlob(String),
    #[error("{0}")]
    BadRequest(Cow<'static, str>),
}

impl From<SystemError> for Error {
    fn from(value: SystemError) -> Self {
        log::error!("Request failed: {:?}", value);
        Error::Internal(value.to_string().into())
    }
}

impl From<sqlx::Error> for SystemError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            log::error!("Database error (code {:?}): {}", db_err.code(), db_err.message());
            return SystemError::DatabaseError(db_err.message().to_string().into());
        }
        log::error!("{:?}", err);
        SystemError::DatabaseError(err.to_string().into())
    }
}

impl From<MultipartError> for SystemError {
    fn from(err: MultipartError) -> Self {
        SystemError::MultipartError(err.to_string().into())
    }
}

impl SystemError {
    pub fn bad_request(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn database(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::DatabaseError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_system_error_message_is_verbatim() {
        let err: Error = SystemError::database("db down").into();
        assert!(matches!(&err, Error::Internal(msg) if msg == "db down"));
    }

    #[test]
    fn test_internal_error_shapes_json_body() {
        let res: Response = Error::internal("boom").into();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(res.content_type(), Some("application/json"));
        assert_eq!(res.body().as_ref(), br#"{"error":"boom"}"#);
    }

    #[test]
    fn test_not_found_error_is_plaintext() {
        let res: Response = Error::not_found("File not found").into();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(res.content_type(), Some("text/plain; charset=utf-8"));
        assert_eq!(res.body().as_ref(), b"File not found");
    }

    #[test]
    fn test_bad_request_folds_into_internal() {
        let res: Response = Error::from(SystemError::bad_request("No file uploaded")).into();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(res.body().as_ref(), br#"{"error":"No file uploaded"}"#);
    }
}
