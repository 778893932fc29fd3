//! Market aggregation engine
//!
//! Scatters one probe fan-out per endpoint and, inside each endpoint, one
//! fan-out per market, then gathers all settled results. Every branch
//! returns data-or-error; a slow or failing sibling never cancels the rest,
//! and the gathered set always has exactly one entry per input.

use dexboard_core::market::{
    version_consensus, AssetPair, Balances, MarketData, MarketRecord, AMOUNT_UNAVAILABLE,
};
use dexboard_core::{AggregateOutcome, EndpointResult, ErrorObject, ResultObject};
use dexboard_provider::types::PriceResponse;
use dexboard_provider::ProviderClient;
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Orchestrates the endpoint prober across a list of provider endpoints
#[derive(Debug, Clone)]
pub struct AggregationService {
    client: Arc<ProviderClient>,
}

impl AggregationService {
    pub fn new(client: ProviderClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Run one full fetch cycle over the given endpoints.
    ///
    /// The returned aggregate is built from scratch; nothing is merged with
    /// previous cycles. Per-endpoint errors are flattened into one list
    /// alongside, not instead of, partial results.
    #[instrument(skip(self))]
    pub async fn aggregate(&self, endpoints: &[String]) -> AggregateOutcome {
        info!("Aggregating markets from {} endpoints", endpoints.len());

        let branches = endpoints.iter().map(|e| self.aggregate_endpoint(e));
        let settled = join_all(branches).await;

        let mut results = ResultObject::new();
        let mut errors = Vec::new();
        for (endpoint, (entry, endpoint_errors)) in endpoints.iter().zip(settled) {
            results.insert(endpoint.clone(), entry);
            errors.extend(endpoint_errors);
        }

        info!(
            "Aggregation finished: {} endpoints, {} errors",
            results.len(),
            errors.len()
        );
        AggregateOutcome { results, errors }
    }

    /// Probe one endpoint's listing, then its markets concurrently
    async fn aggregate_endpoint(&self, endpoint: &str) -> (EndpointResult, Vec<ErrorObject>) {
        let listing = match self.client.list_markets(endpoint).await {
            Ok(listing) => listing,
            Err(e) => {
                warn!("Endpoint {} not available: {}", endpoint, e);
                return (
                    EndpointResult::default(),
                    vec![ErrorObject::endpoint_not_available(endpoint, e.to_string())],
                );
            }
        };

        debug!(
            "Endpoint {} listed {} markets (legacy: {})",
            endpoint,
            listing.data.markets.len(),
            listing.legacy
        );

        let fetches = listing
            .data
            .markets
            .iter()
            .map(|record| self.fetch_market(endpoint, record));
        let settled = join_all(fetches).await;

        let mut markets = Vec::with_capacity(settled.len());
        let mut errors = Vec::new();
        for (market, market_errors) in settled {
            markets.push(market);
            errors.extend(market_errors);
        }

        (
            EndpointResult {
                markets,
                provider_name: None,
            },
            errors,
        )
    }

    /// Probe price (and balance when absent) for one listed market and merge
    /// everything into the unified record.
    ///
    /// A failed market never drops out of the output; it keeps its listing
    /// fees and renders with placeholder price/balance fields.
    async fn fetch_market(
        &self,
        endpoint: &str,
        record: &MarketRecord,
    ) -> (MarketData, Vec<ErrorObject>) {
        let pair = record.pair();

        let price = match self.client.market_price(endpoint, pair).await {
            Ok(price) => price,
            Err(e) => {
                warn!(
                    "Market {}/{} not available on {}: {}",
                    pair.base_asset, pair.quote_asset, endpoint, e
                );
                return (
                    MarketData::unavailable(record),
                    vec![ErrorObject::market_not_available(endpoint, e.to_string())],
                );
            }
        };

        let mut version_flags = vec![price.legacy];
        let mut balance = price.data.balance.clone();
        let mut errors = Vec::new();

        // Legacy providers omit balances from the price response; splice in
        // a supplemental balance probe for that specific market.
        if balance.is_none() {
            match self.client.market_balance(endpoint, pair).await {
                Ok(probed) => {
                    version_flags.push(probed.legacy);
                    balance = Some(probed.data.balance);
                }
                Err(e) => {
                    warn!(
                        "Balance for {}/{} not available on {}: {}",
                        pair.base_asset, pair.quote_asset, endpoint, e
                    );
                    errors.push(ErrorObject::market_not_available(endpoint, e.to_string()));
                }
            }
        }

        (
            merge_market(record, &price.data, balance, &version_flags),
            errors,
        )
    }
}

/// Merge one market's listing, price and balance lookups into the immutable
/// output record, folding the per-lookup legacy flags into the version
/// consensus
fn merge_market(
    record: &MarketRecord,
    price: &PriceResponse,
    balance: Option<Balances>,
    version_flags: &[bool],
) -> MarketData {
    let pair: &AssetPair = record.pair();

    MarketData {
        base_asset: pair.base_asset.clone(),
        quote_asset: pair.quote_asset.clone(),
        balances: balance,
        spot_price: price.spot_price,
        min_tradeable_amount: price
            .min_tradable_amount
            .clone()
            .unwrap_or_else(|| AMOUNT_UNAVAILABLE.to_string()),
        fees: record.fees(),
        v1: version_consensus(version_flags),
    }
}
