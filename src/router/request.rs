use actix_web::{
    http::{
        header::{HeaderMap, HeaderName, HeaderValue},
        Method,
    },
    web::Bytes,
    HttpRequest,
};
use std::collections::HashMap;

/// An inbound request with its body fully buffered.
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Bytes,
    params: HashMap<String, String>,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            body: Bytes::new(),
            params: HashMap::new(),
        }
    }

    pub fn from_http(req: &HttpRequest, body: Bytes) -> Self {
        Self {
            method: req.method().clone(),
            path: req.path().to_owned(),
            headers: req.headers().clone(),
            body,
            params: HashMap::new(),
        }
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    pub(crate) fn with_params(mut self, params: HashMap<String, String>) -> Self {
        self.params = params;
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Value bound to a `:name` segment of the matched route.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header;

    #[test]
    fn test_from_http_copies_method_path_and_headers() {
        let http = actix_web::test::TestRequest::post()
            .uri("/upload?x=1")
            .insert_header((header::CONTENT_TYPE, "text/plain"))
            .to_http_request();

        let req = Request::from_http(&http, Bytes::from_static(b"hi"));
        assert_eq!(*req.method(), Method::POST);
        assert_eq!(req.path(), "/upload");
        assert_eq!(
            req.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
            Some("text/plain")
        );
        assert_eq!(req.body().as_ref(), b"hi");
        assert_eq!(req.param("filename"), None);
    }
}
