use std::sync::Arc;

use crate::api::{error, response::Response, success::Success};
use crate::modules::user::schema::LIST_USERS_SQL;
use crate::store::QueryExecutor;

pub async fn list_users(db: Arc<dyn QueryExecutor>) -> Result<Response, error::Error> {
    let rows = db.prepare(LIST_USERS_SQL).all().await?;
    Ok(Success::ok(rows).into_response()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::MemoryQueryExecutor;
    use actix_web::http::StatusCode;
    use serde_json::json;

    #[actix_web::test]
    async fn test_list_users_passes_rows_through() {
        let db = Arc::new(MemoryQueryExecutor::with_rows(json!([{"id": 1, "name": "a"}])));

        let res = list_users(db.clone()).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.content_type(), Some("application/json"));
        assert_eq!(res.body().as_ref(), br#"[{"id":1,"name":"a"}]"#);
        assert_eq!(*db.queries.lock().unwrap(), vec![LIST_USERS_SQL.to_string()]);
    }

    #[actix_web::test]
    async fn test_list_users_empty_table() {
        let db = Arc::new(MemoryQueryExecutor::with_rows(json!([])));
        let res = list_users(db).await.unwrap();
        assert_eq!(res.body().as_ref(), b"[]");
    }

    #[actix_web::test]
    async fn test_list_users_surfaces_store_error() {
        let db = Arc::new(MemoryQueryExecutor::failing("db down"));
        let err = list_users(db).await.unwrap_err();
        assert!(matches!(&err, error::Error::Internal(msg) if msg == "db down"));
    }
}
