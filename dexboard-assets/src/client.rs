//! Blockchain metadata service client

use dexboard_core::DashboardError;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};

/// Base URL for the blockchain-data metadata service
pub const DEFAULT_ASSET_API: &str = "https://blockstream.info/liquid/api";

/// Raw metadata entry as served by the blockchain-data service.
///
/// Name and precision are optional on the wire; entries missing either are
/// dropped by the resolver rather than propagated.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAssetInfo {
    pub name: Option<String>,
    pub precision: Option<u8>,
    #[serde(default)]
    pub mempool_stats: serde_json::Value,
}

/// Client for per-asset metadata lookups
#[derive(Clone)]
pub struct AssetRegistryClient {
    client: Client,
    base_url: String,
}

impl AssetRegistryClient {
    /// Create a new metadata client against the given API base
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch metadata for a single asset identifier
    #[instrument(skip(self))]
    pub async fn get_asset(&self, asset_id: &str) -> Result<RawAssetInfo, DashboardError> {
        let url = format!("{}/asset/{}", self.base_url.trim_end_matches('/'), asset_id);

        debug!("Fetching asset metadata from: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DashboardError::network(format!("Failed to fetch asset: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DashboardError::api(format!(
                "Asset API error ({}): {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| DashboardError::parse(format!("Failed to parse asset metadata: {}", e)))
    }
}

impl Default for AssetRegistryClient {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_API)
    }
}

impl std::fmt::Debug for AssetRegistryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetRegistryClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}
