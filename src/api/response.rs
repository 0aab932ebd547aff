use actix_web::{
    http::{
        header::{self, HeaderName, HeaderValue},
        StatusCode,
    },
    web::Bytes,
    HttpResponse,
};
use std::borrow::Cow;

pub const OCTET_STREAM: &str = "application/octet-stream";
const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
const APPLICATION_JSON: &str = "application/json";

/// A fully buffered response produced by a route handler.
///
/// Independent of the HTTP host so handlers can be exercised without a
/// running server; converted to an actix `HttpResponse` at the edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: StatusCode,
    headers: Vec<(HeaderName, HeaderValue)>,
    body: Bytes,
}

impl Response {
    pub fn new(status: StatusCode) -> Self {
        Self { status, headers: Vec::new(), body: Bytes::new() }
    }

    pub fn text(status: StatusCode, body: impl Into<Cow<'static, str>>) -> Self {
        let body = match body.into() {
            Cow::Borrowed(s) => Bytes::from_static(s.as_bytes()),
            Cow::Owned(s) => Bytes::from(s),
        };
        Self::new(status).with_content_type(TEXT_PLAIN).with_body(body)
    }

    pub fn json<T>(status: StatusCode, value: &T) -> Result<Self, serde_json::Error>
    where
        T: serde::Serialize,
    {
        let body = serde_json::to_vec(value)?;
        Ok(Self::new(status).with_content_type(APPLICATION_JSON).with_body(body))
    }

    pub fn not_found(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::text(StatusCode::NOT_FOUND, msg)
    }

    /// 500 with a JSON body. Falls back to plaintext if the body cannot be
    /// serialized so the caller always gets a well-formed response.
    pub fn internal_error<T: serde::Serialize>(body: &T) -> Self {
        Self::json(StatusCode::INTERNAL_SERVER_ERROR, body).unwrap_or_else(|e| {
            log::error!("Failed to serialize error body: {e}");
            Self::text(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        })
    }

    /// Sets the `Content-Type` header. Values that are not valid header
    /// text are replaced by `application/octet-stream`.
    pub fn with_content_type(self, content_type: &str) -> Self {
        let value = HeaderValue::from_str(content_type)
            .unwrap_or_else(|_| HeaderValue::from_static(OCTET_STREAM));
        self.with_header(header::CONTENT_TYPE, value)
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.retain(|(n, _)| *n != name);
        self.headers.push((name, value));
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> impl Iterator<Item = (&HeaderName, &HeaderValue)> {
        self.headers.iter().map(|(n, v)| (n, v))
    }

    pub fn header(&self, name: &HeaderName) -> Option<&HeaderValue> {
        self.headers.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header(&header::CONTENT_TYPE).and_then(|v| v.to_str().ok())
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }
}

impl actix_web::Responder for Response {
    type Body = actix_web::body::BoxBody;

    fn respond_to(self, _req: &actix_web::HttpRequest) -> HttpResponse<Self::Body> {
        let mut response = HttpResponse::build(self.status);

        for (name, value) in self.headers {
            response.insert_header((name, value));
        }

        response.body(self.body)
    }
}
