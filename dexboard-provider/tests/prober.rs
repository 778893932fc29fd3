//! Endpoint prober behavior against a mock provider

use dexboard_core::market::AssetPair;
use dexboard_provider::{ProbeError, ProviderClient};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client() -> ProviderClient {
    // gateway never used against clear-web mock hosts
    ProviderClient::new("https://gateway.invalid")
}

fn pair() -> AssetPair {
    AssetPair {
        base_asset: "aaaa".to_string(),
        quote_asset: "bbbb".to_string(),
    }
}

#[tokio::test]
async fn current_path_listing_is_not_legacy() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/markets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "markets": [{
                "market": { "baseAsset": "aaaa", "quoteAsset": "bbbb" },
                "fee": {
                    "fixedFee": { "baseAsset": "0", "quoteAsset": "0" },
                    "percentageFee": { "baseAsset": "25", "quoteAsset": "25" }
                }
            }]
        })))
        .mount(&server)
        .await;

    let listing = client().list_markets(&server.uri()).await.unwrap();
    assert!(!listing.legacy);
    assert_eq!(listing.data.markets.len(), 1);
    assert!(!listing.data.markets[0].is_v1());
}

#[tokio::test]
async fn not_found_falls_back_to_legacy_path_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/markets"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/markets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "markets": [{
                "market": { "baseAsset": "aaaa", "quoteAsset": "bbbb" },
                "fee": { "basisPoint": 25, "fixed": { "baseFee": 0, "quoteFee": 0 } }
            }]
        })))
        .mount(&server)
        .await;

    let listing = client().list_markets(&server.uri()).await.unwrap();
    assert!(listing.legacy);
    assert!(listing.data.markets[0].is_v1());
}

#[tokio::test]
async fn failing_legacy_retry_is_a_v1_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/markets"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/markets"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client().list_markets(&server.uri()).await.unwrap_err();
    assert!(matches!(err, ProbeError::Legacy(_)));
    assert!(err.to_string().starts_with("v1 endpoint error"));
}

#[tokio::test]
async fn edge_proxy_handshake_failure_is_an_ssl_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/markets"))
        .respond_with(ResponseTemplate::new(525).set_body_string("handshake failed"))
        .mount(&server)
        .await;

    let err = client().list_markets(&server.uri()).await.unwrap_err();
    match err {
        ProbeError::Ssl(body) => assert_eq!(body, "handshake failed"),
        other => panic!("expected SSL error, got {other:?}"),
    }
}

#[tokio::test]
async fn internal_server_error_embeds_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/markets"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client().list_markets(&server.uri()).await.unwrap_err();
    match err {
        ProbeError::Server { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    // nothing listens here
    let err = client()
        .list_markets("http://127.0.0.1:1")
        .await
        .unwrap_err();
    assert!(matches!(err, ProbeError::Transport(_)));
}

#[tokio::test]
async fn price_probe_sends_market_body_and_reads_inline_balance() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/market/price"))
        .and(body_json(json!({
            "market": { "baseAsset": "aaaa", "quoteAsset": "bbbb" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "spotPrice": 0.000025,
            "minTradableAmount": "1000",
            "balance": { "baseAmount": 500000, "quoteAmount": "12" }
        })))
        .mount(&server)
        .await;

    let price = client().market_price(&server.uri(), &pair()).await.unwrap();
    assert!(!price.legacy);
    assert_eq!(price.data.spot_price, Some(0.000025));
    assert_eq!(price.data.min_tradable_amount.as_deref(), Some("1000"));
    let balance = price.data.balance.unwrap();
    assert_eq!(balance.base_amount, "500000");
}

#[tokio::test]
async fn legacy_balance_probe_is_flagged() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/market/balance"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/market/balance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "balance": { "baseAmount": "77", "quoteAmount": "88" }
        })))
        .mount(&server)
        .await;

    let balance = client()
        .market_balance(&server.uri(), &pair())
        .await
        .unwrap();
    assert!(balance.legacy);
    assert_eq!(balance.data.balance.quote_amount, "88");
}
