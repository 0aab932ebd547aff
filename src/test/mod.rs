//! In-memory stand-ins for the external stores, shared by handler tests.

use actix_web::{
    http::{
        header::{self, HeaderValue},
        Method,
    },
    web::Bytes,
};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::{
    api::error,
    router::Request,
    store::{BlobMetadata, BlobStore, QueryExecutor, Row, StoredBlob},
};

pub struct MemoryQueryExecutor {
    result: Result<Vec<Row>, String>,
    pub queries: Mutex<Vec<String>>,
}

impl MemoryQueryExecutor {
    pub fn with_rows(rows: serde_json::Value) -> Self {
        let rows = serde_json::from_value(rows).expect("rows must be an array of objects");
        Self { result: Ok(rows), queries: Mutex::new(Vec::new()) }
    }

    pub fn failing(msg: &str) -> Self {
        Self { result: Err(msg.to_string()), queries: Mutex::new(Vec::new()) }
    }
}

#[async_trait::async_trait]
impl QueryExecutor for MemoryQueryExecutor {
    async fn fetch_all(&self, sql: &str) -> Result<Vec<Row>, error::SystemError> {
        self.queries.lock().unwrap().push(sql.to_string());
        self.result.clone().map_err(error::SystemError::database)
    }
}

#[derive(Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<HashMap<String, StoredBlob>>,
    fail_with: Option<String>,
    pub puts: Mutex<Vec<(String, Bytes, BlobMetadata)>>,
}

impl MemoryBlobStore {
    pub fn failing(msg: &str) -> Self {
        Self { fail_with: Some(msg.to_string()), ..Default::default() }
    }

    pub fn insert(&self, key: &str, body: &'static [u8], content_type: Option<&str>) {
        let blob = StoredBlob {
            body: Bytes::from_static(body),
            metadata: BlobMetadata { content_type: content_type.map(str::to_string) },
        };
        self.blobs.lock().unwrap().insert(key.to_string(), blob);
    }

    fn check(&self) -> Result<(), error::SystemError> {
        match &self.fail_with {
            Some(msg) => Err(std::io::Error::other(msg.clone()).into()),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl BlobStore for MemoryBlobStore {
    async fn put(
        &self,
        key: &str,
        body: Bytes,
        metadata: BlobMetadata,
    ) -> Result<(), error::SystemError> {
        self.check()?;
        self.puts.lock().unwrap().push((key.to_string(), body.clone(), metadata.clone()));
        self.blobs.lock().unwrap().insert(key.to_string(), StoredBlob { body, metadata });
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<StoredBlob>, error::SystemError> {
        self.check()?;
        Ok(self.blobs.lock().unwrap().get(key).cloned())
    }
}

pub const BOUNDARY: &str = "----agentcy-test-boundary";

/// One part of a `multipart/form-data` body.
pub struct Part<'a> {
    pub name: &'a str,
    pub filename: Option<&'a str>,
    pub content_type: Option<&'a str>,
    pub data: &'a [u8],
}

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        let mut disposition = format!("Content-Disposition: form-data; name=\"{}\"", part.name);
        if let Some(filename) = part.filename {
            disposition.push_str(&format!("; filename=\"{filename}\""));
        }
        body.extend_from_slice(disposition.as_bytes());
        body.extend_from_slice(b"\r\n");
        if let Some(content_type) = part.content_type {
            body.extend_from_slice(format!("Content-Type: {content_type}\r\n").as_bytes());
        }
        body.extend_from_slice(b"\r\n");
        body.extend_from_slice(part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn multipart_request(path: &str, parts: &[Part<'_>]) -> Request {
    let content_type = format!("multipart/form-data; boundary={BOUNDARY}");
    Request::new(Method::POST, path)
        .with_header(header::CONTENT_TYPE, HeaderValue::from_str(&content_type).unwrap())
        .with_body(multipart_body(parts))
}
