use actix_cors::Cors;
use actix_web::http::header;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{api::error, store::FsBlobStore, ENV};

pub async fn connect_database() -> Result<PgPool, error::SystemError> {
    let database_url = &ENV.database_url;
    let pool = PgPoolOptions::new()
        .max_connections(ENV.db_max_connections)
        .min_connections(1)
        .acquire_slow_threshold(std::time::Duration::from_secs(3))
        .connect(database_url)
        .await?;
    Ok(pool)
}

pub async fn open_blob_store() -> Result<FsBlobStore, error::SystemError> {
    let store = FsBlobStore::new(&ENV.blob_dir);
    store.initialize().await?;
    Ok(store)
}

/// CORS policy: `FRONTEND_URL=*` allows any origin.
pub fn cors(frontend_url: &str) -> Cors {
    let cors = if frontend_url == "*" {
        Cors::default().allow_any_origin()
    } else {
        Cors::default().allowed_origin(frontend_url)
    };

    cors.allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_header(header::CONTENT_TYPE)
        .max_age(86400)
}
