//! DEX Network Dashboard API Server
//!
//! HTTP API server that lists providers of a decentralized exchange network,
//! aggregates their markets, and enriches the aggregate with asset metadata,
//! mirror detection, and dashboard counters.

mod routes;
mod validate;

use axum::{
    http::{header, Method},
    Router,
};
use dexboard_assets::{AssetRegistryClient, AssetResolver, DEFAULT_ASSET_API};
use dexboard_provider::client::DEFAULT_ONION_GATEWAY;
use dexboard_provider::ProviderClient;
use dexboard_services::{AggregationService, ProviderRegistry, DEFAULT_REGISTRY_URL};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<AggregationService>,
    pub resolver: Arc<AssetResolver>,
    pub registry: Arc<ProviderRegistry>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env.local file
    if let Err(e) = dotenvy::from_filename(".env.local") {
        // Not an error if the file doesn't exist
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env.local: {}", e);
        }
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,dexboard_api=debug")),
        )
        .init();

    info!("Starting DEX Network Dashboard API");

    let gateway =
        std::env::var("ONION_GATEWAY_URL").unwrap_or_else(|_| DEFAULT_ONION_GATEWAY.to_string());
    let asset_api = std::env::var("ASSET_API_URL").unwrap_or_else(|_| DEFAULT_ASSET_API.to_string());
    let registry_url =
        std::env::var("REGISTRY_URL").unwrap_or_else(|_| DEFAULT_REGISTRY_URL.to_string());

    info!("Onion gateway: {}", gateway);
    info!("Asset metadata API: {}", asset_api);
    info!("Provider registry: {}", registry_url);

    let state = AppState {
        aggregator: Arc::new(AggregationService::new(ProviderClient::new(gateway))),
        resolver: Arc::new(AssetResolver::new(AssetRegistryClient::new(asset_api))),
        registry: Arc::new(ProviderRegistry::new(registry_url)),
    };

    // Configure CORS for frontend
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    // Build router
    let app = Router::new()
        .merge(routes::api_routes())
        .layer(cors)
        .with_state(state);

    // Start server
    let port = std::env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
