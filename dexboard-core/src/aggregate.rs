//! Aggregate result shapes produced by one fetch cycle
//!
//! Errors are always data here: each concurrent branch of the pipeline
//! returns an error-shaped result rather than raising, so a single bad
//! endpoint or market never aborts the batch.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::market::MarketData;

/// Error status for an endpoint whose market-listing probe failed
pub const ENDPOINT_NOT_AVAILABLE: &str = "Endpoint not available";

/// Error status for a market whose price/balance probe failed
pub const MARKET_NOT_AVAILABLE: &str = "Market not available";

/// Per-endpoint slice of the aggregate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointResult {
    pub markets: Vec<MarketData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
}

/// Root aggregate of one fetch cycle, keyed by endpoint URL.
///
/// Entries appear in input registration order and the map is rebuilt from
/// scratch on every fetch; there is no merging with previous cycles.
pub type ResultObject = IndexMap<String, EndpointResult>;

/// One accumulated pipeline error, attached to an endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorObject {
    pub status: String,
    pub message: Option<String>,
    pub endpoint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
}

impl ErrorObject {
    pub fn endpoint_not_available(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: ENDPOINT_NOT_AVAILABLE.to_string(),
            message: Some(message.into()),
            endpoint: endpoint.into(),
            provider_name: None,
        }
    }

    pub fn market_not_available(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: MARKET_NOT_AVAILABLE.to_string(),
            message: Some(message.into()),
            endpoint: endpoint.into(),
            provider_name: None,
        }
    }
}

/// Results plus the flattened error set of one aggregation run
#[derive(Debug, Clone, Default, Serialize)]
pub struct AggregateOutcome {
    pub results: ResultObject,
    pub errors: Vec<ErrorObject>,
}

/// Cross-references for one endpoint serving byte-identical market data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateEntry {
    pub endpoints: Vec<String>,
    pub names: Vec<String>,
}

/// Duplicate cross-references keyed by endpoint URL, symmetric and
/// transitively closed within a signature group
pub type DuplicateGroups = IndexMap<String, DuplicateEntry>;

/// Dashboard-level counters derived from one fetch cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub reachable: usize,
    pub total_markets: usize,
    pub tradable_markets: usize,
}
