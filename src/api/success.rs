use actix_web::http::StatusCode;

use crate::api::{error, response::Response};

/// A successful JSON payload waiting to be shaped into a `Response`.
pub struct Success<T: serde::Serialize> {
    pub status: StatusCode,
    pub body: T,
}

impl<T: serde::Serialize> Success<T> {
    pub fn ok(body: T) -> Self {
        Self { status: StatusCode::OK, body }
    }

    pub fn into_response(self) -> Result<Response, error::SystemError> {
        Ok(Response::json(self.status, &self.body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(serde::Serialize)]
    struct Payload {
        success: bool,
    }

    #[test]
    fn test_ok_serializes_body() {
        let res = Success::ok(Payload { success: true }).into_response().unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.body().as_ref(), br#"{"success":true}"#);
    }
}
