//! Provider listing endpoint

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use tracing::info;

use crate::AppState;

/// Create provider routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/fetch-providers", get(fetch_providers))
}

/// List known providers from the registry, falling back to the bundled list
async fn fetch_providers(State(state): State<AppState>) -> impl IntoResponse {
    let providers = state.registry.fetch_providers().await;
    info!("Returning {} providers", providers.len());
    (StatusCode::OK, Json(providers))
}
