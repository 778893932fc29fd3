//! Provider registry
//!
//! Providers come from a third-party registry (a JSON list of name/endpoint
//! pairs); when the registry is unreachable the bundled static list is
//! served instead so the dashboard still renders something useful.

use dexboard_core::{DashboardError, Provider};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Default upstream registry of known providers
pub const DEFAULT_REGISTRY_URL: &str =
    "https://raw.githubusercontent.com/tdex-network/tdex-registry/master/registry.json";

/// Bundled fallback served when the upstream registry is unreachable
const FALLBACK_PROVIDERS: &[(&str, &str)] = &[
    ("vulpem", "https://provider.tdex.network:9945"),
    (
        "tdexbtse",
        "http://cl5smsdedq6hy5bzheq5zzkqorte5w5tb74gwzh7wnehmr2nzdrmqsyd.onion:9945",
    ),
];

/// Raw registry entry; `onion` is derived locally, never trusted from upstream
#[derive(Debug, Clone, Deserialize)]
struct RegistryEntry {
    name: String,
    endpoint: String,
}

/// Fetches the provider list with a bundled static fallback
#[derive(Clone)]
pub struct ProviderRegistry {
    client: Client,
    registry_url: String,
}

impl ProviderRegistry {
    pub fn new(registry_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            registry_url: registry_url.into(),
        }
    }

    /// Fetch the provider list, falling back to the bundled list on any
    /// upstream failure
    #[instrument(skip(self))]
    pub async fn fetch_providers(&self) -> Vec<Provider> {
        match self.fetch_remote().await {
            Ok(providers) => {
                debug!("Registry returned {} providers", providers.len());
                providers
            }
            Err(e) => {
                warn!("Provider registry unavailable, serving bundled list: {}", e);
                fallback_providers()
            }
        }
    }

    async fn fetch_remote(&self) -> Result<Vec<Provider>, DashboardError> {
        let response = self
            .client
            .get(&self.registry_url)
            .send()
            .await
            .map_err(|e| DashboardError::network(format!("Failed to fetch registry: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DashboardError::api(format!(
                "Registry error ({}): {}",
                status, body
            )));
        }

        let entries: Vec<RegistryEntry> = response
            .json()
            .await
            .map_err(|e| DashboardError::parse(format!("Failed to parse registry: {}", e)))?;

        Ok(entries
            .into_iter()
            .map(|entry| Provider::new(entry.name, entry.endpoint))
            .collect())
    }
}

/// The bundled provider list with derived onion flags
pub fn fallback_providers() -> Vec<Provider> {
    FALLBACK_PROVIDERS
        .iter()
        .map(|(name, endpoint)| Provider::new(*name, *endpoint))
        .collect()
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("registry_url", &self.registry_url)
            .finish()
    }
}
