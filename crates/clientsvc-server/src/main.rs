use axum::{routing::get, Json, Router};
use serde::Serialize;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod models;
mod routes;

use adapters::{HttpAccountsClient, PgClientRepository};
use application::ClientService;
use config::Config;

/// Type alias for the application service with concrete adapters
pub type AppClientService = ClientService<PgClientRepository, HttpAccountsClient>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub client_service: Arc<AppClientService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Client registry API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Client registry API initializing...");

    let config = Config::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    // Run migrations
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed");

    // Initialize the application service with its concrete adapters
    let client_repo = Arc::new(PgClientRepository::new(pool));
    let accounts = Arc::new(HttpAccountsClient::new(config.accounts_base_url.clone()));
    let client_service = Arc::new(ClientService::new(client_repo, accounts));

    tracing::info!("Accounts service endpoint: {}", config.accounts_base_url);

    let state = AppState { client_service };

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    // Build router with shared state
    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::clients::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Client registry API ready on {}", config.bind_addr);
    tracing::info!("Swagger UI: /swagger-ui");

    axum::serve(listener, router).await?;

    Ok(())
}
