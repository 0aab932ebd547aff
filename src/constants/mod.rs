pub struct Env {
    pub database_url: String,
    pub db_max_connections: u32,
    pub blob_dir: String,
    pub max_upload_size: usize,
    pub frontend_url: String,
    pub ip: String,
    pub port: u16,
    pub workers: usize,
}

impl Env {
    fn new() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set in .env file or environment variable");
        let db_max_connections = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .expect("DB_MAX_CONNECTIONS must be a valid u32 integer");

        let blob_dir = std::env::var("BLOB_DIR").unwrap_or_else(|_| "./uploads".to_string());
        let max_upload_size = std::env::var("MAX_UPLOAD_SIZE")
            .unwrap_or_else(|_| (10 * 1024 * 1024).to_string())
            .parse::<usize>()
            .expect("MAX_UPLOAD_SIZE must be a valid usize integer");

        let frontend_url = std::env::var("FRONTEND_URL").unwrap_or_else(|_| "*".to_string());
        let ip = std::env::var("IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid u16 integer");
        let workers = std::env::var("WORKERS")
            .unwrap_or_else(|_| "2".to_string())
            .parse::<usize>()
            .expect("WORKERS must be a valid usize integer");
        Env {
            database_url,
            db_max_connections,
            blob_dir,
            max_upload_size,
            frontend_url,
            ip,
            port,
            workers,
        }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
