//! Market aggregation endpoint

use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router,
};
use dexboard_core::{AssetInfo, DuplicateGroups, ErrorObject, Provider, ResultObject, Stats};
use dexboard_services::{find_duplicates, summarize};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{error, info};

use crate::validate::invalid_endpoints;
use crate::AppState;

/// Request body for one fetch cycle
#[derive(Debug, Deserialize)]
pub struct FetchMarketBalancesRequest {
    pub endpoints: Vec<String>,
}

/// Aggregate of one fetch cycle plus its enrichment layers
#[derive(Debug, Serialize)]
pub struct FetchMarketBalancesResponse {
    pub results: ResultObject,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorObject>,
    pub assets: HashMap<String, AssetInfo>,
    pub duplicates: DuplicateGroups,
    pub stats: Stats,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Create market routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/fetch-market-balances", post(fetch_market_balances))
}

/// Run one fetch cycle over the requested endpoints.
///
/// The whole batch is rejected when any endpoint fails validation. Partial
/// upstream failures degrade to 206 with the error set alongside whatever
/// subset succeeded.
async fn fetch_market_balances(
    State(state): State<AppState>,
    Json(request): Json<FetchMarketBalancesRequest>,
) -> impl IntoResponse {
    info!(
        "Fetching market balances for {} endpoints",
        request.endpoints.len()
    );

    let invalid = invalid_endpoints(&request.endpoints);
    if !invalid.is_empty() {
        error!("Rejecting fetch batch, invalid endpoints: {:?}", invalid);
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("Invalid endpoints: {}", invalid.join(", ")),
            }),
        )
            .into_response();
    }

    let (mut outcome, known_providers) = tokio::join!(
        state.aggregator.aggregate(&request.endpoints),
        state.registry.fetch_providers()
    );

    annotate_provider_names(&mut outcome.results, &mut outcome.errors, &known_providers);

    let assets = state.resolver.resolve(&outcome.results).await;
    let duplicates = find_duplicates(&outcome.results);

    // Session providers: registry entries when known, ad hoc otherwise
    let session_providers: Vec<Provider> = request
        .endpoints
        .iter()
        .map(|endpoint| {
            known_providers
                .iter()
                .find(|p| &p.endpoint == endpoint)
                .cloned()
                .unwrap_or_else(|| Provider::new(endpoint.clone(), endpoint.clone()))
        })
        .collect();
    let stats = summarize(&session_providers, &outcome.errors, &outcome.results);

    let status = if outcome.errors.is_empty() {
        StatusCode::OK
    } else {
        StatusCode::PARTIAL_CONTENT
    };

    (
        status,
        Json(FetchMarketBalancesResponse {
            results: outcome.results,
            errors: outcome.errors,
            assets,
            duplicates,
            stats,
        }),
    )
        .into_response()
}

/// Join registry display names onto results and errors by endpoint
fn annotate_provider_names(
    results: &mut ResultObject,
    errors: &mut [ErrorObject],
    providers: &[Provider],
) {
    let names: HashMap<&str, &str> = providers
        .iter()
        .map(|p| (p.endpoint.as_str(), p.name.as_str()))
        .collect();

    for (endpoint, entry) in results.iter_mut() {
        if let Some(name) = names.get(endpoint.as_str()) {
            entry.provider_name = Some((*name).to_string());
        }
    }
    for error in errors.iter_mut() {
        if let Some(name) = names.get(error.endpoint.as_str()) {
            error.provider_name = Some((*name).to_string());
        }
    }
}
