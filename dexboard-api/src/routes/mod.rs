//! API route definitions

mod health;
mod markets;
mod providers;

use crate::AppState;
use axum::Router;

/// Create all API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(markets::routes())
        .merge(providers::routes())
        .merge(health::routes())
}
