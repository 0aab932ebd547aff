use sqlx::types::Json;

use crate::{
    api::error,
    store::query::{QueryExecutor, Row},
};

#[derive(Clone)]
pub struct PgQueryExecutor {
    pool: sqlx::PgPool,
}

impl PgQueryExecutor {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

/// Wraps a query so Postgres renders each row as a JSON object, which keeps
/// the column set opaque to this crate.
fn as_json_rows(sql: &str) -> String {
    let sql = sql.trim().trim_end_matches(';');
    format!("SELECT row_to_json(t) FROM ({sql}) AS t")
}

#[async_trait::async_trait]
impl QueryExecutor for PgQueryExecutor {
    async fn fetch_all(&self, sql: &str) -> Result<Vec<Row>, error::SystemError> {
        let rows = sqlx::query_scalar::<_, Json<Row>>(&as_json_rows(sql))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(|Json(row)| row).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_json_rows_wraps_query() {
        assert_eq!(
            as_json_rows("SELECT * FROM users;\n"),
            "SELECT row_to_json(t) FROM (SELECT * FROM users) AS t"
        );
    }
}
