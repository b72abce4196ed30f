use axum::{
    http::header::HeaderValue,
    middleware,
    routing::{delete, get, post},
    Router,
};
use once_cell::sync::OnceCell;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
#[path = "middleware/mod.rs"]
mod app_middleware;
mod models;
mod routes;
mod services;
mod store;
mod utils;

use config::AppConfig;
use services::WhitelistService;
use store::{InMemoryStore, WhitelistStore};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub static START_TIME: OnceCell<Instant> = OnceCell::new();

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub whitelist: Arc<WhitelistService>,
}

/// Build the application router. Split out of `main` so tests can drive it
/// directly through `tower::ServiceExt`.
pub fn router(state: AppState) -> Router {
    let cors = if state.config.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        // Health check
        .route("/health", get(routes::health::handler))
        // Whitelist administration
        .nest(
            "/api/v1",
            Router::new()
                .route("/whitelist", post(routes::whitelist::add))
                .route("/whitelist", get(routes::whitelist::list))
                .route("/whitelist/stats", get(routes::whitelist::stats))
                .route("/whitelist/:id", get(routes::whitelist::get))
                .route("/whitelist/:id", delete(routes::whitelist::remove)),
        )
        // Global middleware
        .layer(middleware::from_fn(
            app_middleware::rate_limit::rate_limit_middleware,
        ))
        .layer(middleware::from_fn(
            app_middleware::request_id::request_id_middleware,
        ))
        .layer(cors)
        // Request body limit (1MB)
        .layer(RequestBodyLimitLayer::new(1024 * 1024))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "allowlist_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    START_TIME.set(Instant::now()).ok();

    tracing::info!("Starting allowlist backend...");

    // Load configuration
    let config = Arc::new(AppConfig::from_env()?);
    tracing::info!("Configuration loaded");

    // Build the whitelist store
    let whitelist_store: Arc<dyn WhitelistStore> = if config.seed_demo_entries {
        tracing::info!("Seeding demo whitelist entries");
        Arc::new(InMemoryStore::with_demo_entries())
    } else {
        Arc::new(InMemoryStore::new())
    };

    // Create app state
    let state = AppState {
        config: config.clone(),
        whitelist: Arc::new(WhitelistService::new(whitelist_store)),
    };

    let app = router(state);

    // Periodically evict stale rate-limit windows
    tokio::spawn(async {
        let mut interval = tokio::time::interval(Duration::from_secs(300));
        loop {
            interval.tick().await;
            app_middleware::rate_limit::cleanup().await;
        }
    });

    let addr: SocketAddr = config
        .server_addr
        .parse()
        .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], 3001)));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
