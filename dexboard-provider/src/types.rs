//! Wire response shapes for the provider protocol

use dexboard_core::market::{Balances, MarketRecord};
use serde::Deserialize;

/// Response of the `markets` listing operation.
///
/// Each entry's protocol revision is inferred per record, never configured.
#[derive(Debug, Clone, Deserialize)]
pub struct ListMarketsResponse {
    #[serde(default)]
    pub markets: Vec<MarketRecord>,
}

/// Response of the `market/price` operation.
///
/// The current protocol returns balances inline; the legacy one omits them,
/// which triggers a supplemental `market/balance` probe upstream.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceResponse {
    pub spot_price: Option<f64>,
    pub min_tradable_amount: Option<String>,
    pub balance: Option<Balances>,
}

/// Response of the supplemental `market/balance` operation
#[derive(Debug, Clone, Deserialize)]
pub struct BalanceResponse {
    pub balance: Balances,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_version_listing_parses() {
        let body = serde_json::json!({
            "markets": [
                {
                    "market": { "baseAsset": "a", "quoteAsset": "b" },
                    "fee": {
                        "fixedFee": { "baseAsset": "0", "quoteAsset": "0" },
                        "percentageFee": { "baseAsset": "25", "quoteAsset": "25" }
                    }
                },
                {
                    "market": { "baseAsset": "a", "quoteAsset": "c" },
                    "fee": { "basisPoint": 25, "fixed": { "baseFee": 0, "quoteFee": 0 } }
                }
            ]
        });

        let listing: ListMarketsResponse = serde_json::from_value(body).unwrap();
        assert_eq!(listing.markets.len(), 2);
        assert!(!listing.markets[0].is_v1());
        assert!(listing.markets[1].is_v1());
    }

    #[test]
    fn test_price_without_balance() {
        let body = serde_json::json!({ "spotPrice": 0.5, "minTradableAmount": "1000" });
        let price: PriceResponse = serde_json::from_value(body).unwrap();
        assert_eq!(price.spot_price, Some(0.5));
        assert!(price.balance.is_none());
    }

    #[test]
    fn test_numeric_balance_amounts() {
        let body = serde_json::json!({ "balance": { "baseAmount": 100000, "quoteAmount": "2000" } });
        let balance: BalanceResponse = serde_json::from_value(body).unwrap();
        assert_eq!(balance.balance.base_amount, "100000");
        assert_eq!(balance.balance.quote_amount, "2000");
    }
}
