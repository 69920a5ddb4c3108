//! Server setup and initialization
//!
//! Provides the main application builder and server runner. The storage
//! backend (PostgreSQL or flat files) is chosen here from `STORAGE_MODE`.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use meibo_common::{AppConfig, AppError, JwtService, StorageMode};
use meibo_db::{
    create_pool, FileEventRepository, FileProfileRepository, FileStore, FileUserRepository,
    PgEventRepository, PgProfileRepository, PgUserRepository,
};
use meibo_service::{ServiceContextBuilder, TesseractOcr};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = create_router(&config.storage.upload_dir, config.max_upload_bytes());
    let router = apply_middleware(router, &config.cors);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let jwt_service = Arc::new(JwtService::new(&config.jwt.secret, config.jwt.token_expiry));
    let ocr_engine = Arc::new(TesseractOcr::from_config(&config.ocr));

    let builder = match config.storage.mode {
        StorageMode::Postgres => {
            info!("Connecting to PostgreSQL...");
            let db_config = meibo_db::DatabaseConfig {
                url: config.database.url.clone(),
                max_connections: config.database.max_connections,
                min_connections: config.database.min_connections,
                ..Default::default()
            };
            let pool = create_pool(&db_config)
                .await
                .map_err(|e| AppError::Storage(e.to_string()))?;
            meibo_db::run_migrations(&pool)
                .await
                .map_err(|e| AppError::Storage(e.to_string()))?;
            info!("PostgreSQL connection established");

            ServiceContextBuilder::new()
                .profile_repo(Arc::new(PgProfileRepository::new(pool.clone())))
                .event_repo(Arc::new(PgEventRepository::new(pool.clone())))
                .user_repo(Arc::new(PgUserRepository::new(pool)))
        }
        StorageMode::File => {
            info!(data_dir = %config.storage.data_dir, "Using flat-file storage");
            let store = Arc::new(FileStore::new(&config.storage.data_dir));

            ServiceContextBuilder::new()
                .profile_repo(Arc::new(FileProfileRepository::new(store.clone())))
                .event_repo(Arc::new(FileEventRepository::new(store.clone())))
                .user_repo(Arc::new(FileUserRepository::new(store)))
        }
    };

    let service_context = builder
        .jwt_service(jwt_service)
        .ocr_engine(ocr_engine)
        .upload_dir(&config.storage.upload_dir)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}
