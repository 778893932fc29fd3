//! Dashboard-level counters derived from one fetch cycle

use dexboard_core::{ErrorObject, Provider, ResultObject, Stats, ENDPOINT_NOT_AVAILABLE};
use std::collections::HashSet;

/// Derive reachable-provider and market counts from an aggregate.
///
/// A provider is reachable when no "Endpoint not available" error was
/// recorded against its endpoint; a market is tradable when both of its
/// merged balance fields resolved.
pub fn summarize(providers: &[Provider], errors: &[ErrorObject], results: &ResultObject) -> Stats {
    let unavailable: HashSet<&str> = errors
        .iter()
        .filter(|e| e.status == ENDPOINT_NOT_AVAILABLE)
        .map(|e| e.endpoint.as_str())
        .collect();

    let reachable = providers
        .iter()
        .filter(|p| !unavailable.contains(p.endpoint.as_str()))
        .count();

    let total_markets = results.values().map(|entry| entry.markets.len()).sum();

    let tradable_markets = results
        .values()
        .flat_map(|entry| entry.markets.iter())
        .filter(|market| market.is_tradable())
        .count();

    Stats {
        reachable,
        total_markets,
        tradable_markets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dexboard_core::market::{Balances, FeeSide, Fees, MarketData};
    use dexboard_core::EndpointResult;

    fn market(tradable: bool) -> MarketData {
        MarketData {
            base_asset: "a".to_string(),
            quote_asset: "b".to_string(),
            balances: tradable.then(|| Balances {
                base_amount: "1".to_string(),
                quote_amount: "2".to_string(),
            }),
            spot_price: None,
            min_tradeable_amount: "N/A".to_string(),
            fees: Fees {
                base_fee: FeeSide {
                    fixed: "0".to_string(),
                    percentage: "0".to_string(),
                },
                quote_fee: FeeSide {
                    fixed: "0".to_string(),
                    percentage: "0".to_string(),
                },
            },
            v1: None,
        }
    }

    #[test]
    fn test_summarize_counts() {
        let providers = vec![
            Provider::new("up", "http://up.example.com"),
            Provider::new("down", "http://down.example.com"),
        ];
        let errors = vec![ErrorObject::endpoint_not_available(
            "http://down.example.com",
            "network error: connection refused",
        )];

        let mut results = ResultObject::new();
        results.insert(
            "http://up.example.com".to_string(),
            EndpointResult {
                markets: vec![market(true), market(false), market(true)],
                provider_name: None,
            },
        );
        results.insert(
            "http://down.example.com".to_string(),
            EndpointResult::default(),
        );

        let stats = summarize(&providers, &errors, &results);
        assert_eq!(stats.reachable, 1);
        assert_eq!(stats.total_markets, 3);
        assert_eq!(stats.tradable_markets, 2);
    }

    #[test]
    fn test_market_errors_do_not_affect_reachability() {
        let providers = vec![Provider::new("p", "http://p.example.com")];
        let errors = vec![ErrorObject::market_not_available(
            "http://p.example.com",
            "server error (500): boom",
        )];
        let results = ResultObject::new();

        assert_eq!(summarize(&providers, &errors, &results).reachable, 1);
    }
}
