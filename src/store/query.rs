use crate::api::error;

/// A row as returned by the relational store: column name to JSON value.
pub type Row = serde_json::Map<String, serde_json::Value>;

#[async_trait::async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn fetch_all(&self, sql: &str) -> Result<Vec<Row>, error::SystemError>;
}

impl dyn QueryExecutor {
    pub fn prepare<'a>(&'a self, sql: &'a str) -> Statement<'a> {
        Statement { executor: self, sql }
    }
}

/// A query bound to the executor that will run it.
pub struct Statement<'a> {
    executor: &'a dyn QueryExecutor,
    sql: &'a str,
}

impl Statement<'_> {
    pub async fn all(&self) -> Result<Vec<Row>, error::SystemError> {
        self.executor.fetch_all(self.sql).await
    }
}
