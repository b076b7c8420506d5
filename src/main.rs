use std::sync::Arc;

use axum::{routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use homes_api::config;
use homes_api::homes::{self, HomeStore};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up PORT and paging overrides
    let _ = dotenvy::dotenv();

    let config = config::config();

    tracing_subscriber::fmt::init();

    tracing::info!("Starting homes API in {:?} mode", config.environment);

    let app = app();

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("homes API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app() -> Router {
    let store = Arc::new(HomeStore::new());

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(homes::router(store))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "homes-api",
        "version": version,
        "description": "Resource-oriented REST API for home records",
        "endpoints": {
            "health": "/health (public)",
            "homes": "/api/homes[/:id]",
        }
    }))
}

async fn health() -> axum::response::Json<Value> {
    axum::response::Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now(),
    }))
}
