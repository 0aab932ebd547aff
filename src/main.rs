use actix_web::{self, middleware::Logger, web, App, HttpServer};
use std::sync::Arc;

use agentcy_backend::{
    configs::{connect_database, cors, open_blob_store},
    modules, router,
    store::PgQueryExecutor,
    ENV,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let db_pool =
        connect_database().await.map_err(|_| std::io::Error::other("Database connection error"))?;

    let blob_store = open_blob_store()
        .await
        .map_err(|e| std::io::Error::other(format!("Blob store error: {e}")))?;

    let dispatcher =
        modules::dispatcher(Arc::new(PgQueryExecutor::new(db_pool)), Arc::new(blob_store))
            .map_err(std::io::Error::other)?;
    for route in dispatcher.routes() {
        log::info!("Route {:?} {}", route.method(), route.pattern().as_str());
    }
    let dispatcher = web::Data::new(dispatcher);

    log::info!("Starting server at http://{}:{}", ENV.ip.as_str(), ENV.port);
    HttpServer::new(move || {
        App::new()
            .wrap(cors(&ENV.frontend_url))
            .wrap(Logger::default())
            .app_data(web::PayloadConfig::new(ENV.max_upload_size))
            .app_data(dispatcher.clone())
            .default_service(web::to(router::serve))
    })
    .bind((ENV.ip.as_str(), ENV.port))?
    .workers(ENV.workers)
    .run()
    .await
}
