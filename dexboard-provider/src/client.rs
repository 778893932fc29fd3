//! Endpoint prober
//!
//! Performs one HTTP call against a single provider endpoint per logical
//! operation, using the current protocol path first and falling back once to
//! the legacy path when the provider reports "not found". The caller never
//! receives a raw transport exception; every failure mode is folded into
//! [`ProbeError`].

use crate::onion::rewrite_onion_endpoint;
use crate::types::{BalanceResponse, ListMarketsResponse, PriceResponse};
use dexboard_core::market::AssetPair;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};

/// Default clear-web gateway for onion-suffixed hosts
pub const DEFAULT_ONION_GATEWAY: &str = "https://proxy.tdex.network";

const CURRENT_PREFIX: &str = "v2";
const LEGACY_PREFIX: &str = "v1";

/// Classified probe failure.
///
/// The display form of each variant is what ends up in the `message` field
/// of the accumulated error set.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// DNS, connection refused, timeout - anything below HTTP
    #[error("network error: {0}")]
    Transport(String),

    /// Edge-proxy TLS handshake failure, body surfaced verbatim
    #[error("SSL error: {0}")]
    Ssl(String),

    /// Upstream internal-server error, body surfaced verbatim
    #[error("server error ({status}): {body}")]
    Server { status: u16, body: String },

    /// Any other non-success status
    #[error("unexpected status {status}: {body}")]
    Http { status: u16, body: String },

    /// The legacy-path retry also failed; no further fallback
    #[error("v1 endpoint error: {0}")]
    Legacy(String),

    /// Upstream answered success with a body we cannot decode
    #[error("invalid response: {0}")]
    Parse(String),
}

/// A successful probe plus whether the legacy path served it
#[derive(Debug, Clone)]
pub struct Probed<T> {
    pub data: T,
    pub legacy: bool,
}

/// HTTP client for the provider wire protocol
#[derive(Clone)]
pub struct ProviderClient {
    client: Client,
    gateway: String,
}

impl Default for ProviderClient {
    fn default() -> Self {
        Self::new(DEFAULT_ONION_GATEWAY)
    }
}

impl ProviderClient {
    /// Create a new provider client routing onion hosts through `gateway`
    pub fn new(gateway: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            gateway: gateway.into(),
        }
    }

    /// List the markets a provider offers
    #[instrument(skip(self))]
    pub async fn list_markets(
        &self,
        endpoint: &str,
    ) -> Result<Probed<ListMarketsResponse>, ProbeError> {
        self.probe(endpoint, "markets", &serde_json::json!({})).await
    }

    /// Fetch the spot price (and, on the current protocol, balances) of a market
    #[instrument(skip(self))]
    pub async fn market_price(
        &self,
        endpoint: &str,
        market: &AssetPair,
    ) -> Result<Probed<PriceResponse>, ProbeError> {
        self.probe(endpoint, "market/price", &serde_json::json!({ "market": market }))
            .await
    }

    /// Fetch the balances of a market; supplemental call for legacy providers
    #[instrument(skip(self))]
    pub async fn market_balance(
        &self,
        endpoint: &str,
        market: &AssetPair,
    ) -> Result<Probed<BalanceResponse>, ProbeError> {
        self.probe(endpoint, "market/balance", &serde_json::json!({ "market": market }))
            .await
    }

    /// Send one operation, retrying once on the legacy path on HTTP 404
    async fn probe<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<Probed<T>, ProbeError> {
        let base = rewrite_onion_endpoint(endpoint, &self.gateway);
        let base = base.trim_end_matches('/');

        let response = self.dispatch(base, CURRENT_PREFIX, path, body).await?;

        // "not found" on the current path signals a legacy-only provider
        if response.status().as_u16() == 404 {
            debug!("{}/{} not found on {}, retrying legacy path", CURRENT_PREFIX, path, endpoint);
            let legacy_response = self
                .dispatch(base, LEGACY_PREFIX, path, body)
                .await
                .map_err(|e| ProbeError::Legacy(e.to_string()))?;
            let data = classify(legacy_response)
                .await
                .map_err(|e| ProbeError::Legacy(e.to_string()))?;
            return Ok(Probed { data, legacy: true });
        }

        let data = classify(response).await?;
        Ok(Probed { data, legacy: false })
    }

    async fn dispatch(
        &self,
        base: &str,
        version: &str,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<reqwest::Response, ProbeError> {
        let url = format!("{base}/{version}/{path}");
        debug!("Probing {}", url);

        self.client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ProbeError::Transport(e.to_string()))
    }
}

/// Map a non-transport response into data or a classified error
async fn classify<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ProbeError> {
    let status = response.status();

    if status.is_success() {
        return response
            .json::<T>()
            .await
            .map_err(|e| ProbeError::Parse(e.to_string()));
    }

    let code = status.as_u16();
    let body = response.text().await.unwrap_or_default();

    Err(match code {
        // Cloudflare-style edge handshake failures
        525 | 526 => ProbeError::Ssl(body),
        500..=599 => ProbeError::Server { status: code, body },
        _ => ProbeError::Http { status: code, body },
    })
}

impl std::fmt::Debug for ProviderClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderClient")
            .field("gateway", &self.gateway)
            .finish()
    }
}
