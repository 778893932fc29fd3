//! Concurrent asset resolution over one fetch cycle's aggregate

use crate::client::AssetRegistryClient;
use dexboard_core::{AssetInfo, ResultObject, LBTC_ASSET_ID};
use futures::future::join_all;
use itertools::Itertools;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Resolves every asset identifier referenced by an aggregate into a shared
/// metadata mapping for the session
#[derive(Debug, Clone)]
pub struct AssetResolver {
    client: AssetRegistryClient,
}

impl AssetResolver {
    pub fn new(client: AssetRegistryClient) -> Self {
        Self { client }
    }

    /// Resolve metadata for all assets referenced as base or quote across
    /// every market in every endpoint's result.
    ///
    /// Lookups run concurrently, one per distinct identifier. A failed or
    /// malformed lookup is logged and excluded from the mapping; the record
    /// simply renders with the unnamed placeholder downstream.
    pub async fn resolve(&self, results: &ResultObject) -> HashMap<String, AssetInfo> {
        let asset_ids: Vec<String> = results
            .values()
            .flat_map(|entry| entry.markets.iter())
            .flat_map(|market| [market.base_asset.clone(), market.quote_asset.clone()])
            .unique()
            .collect();

        debug!("Resolving metadata for {} distinct assets", asset_ids.len());

        let lookups = asset_ids.iter().map(|id| async {
            (id.clone(), self.client.get_asset(id).await)
        });

        let mut assets = HashMap::new();
        for (asset_id, outcome) in join_all(lookups).await {
            // The reserved identifier resolves regardless of what the
            // metadata source reports; only its mempool stats pass through.
            if asset_id == LBTC_ASSET_ID {
                let mempool_stats = outcome
                    .map(|raw| raw.mempool_stats)
                    .unwrap_or(serde_json::Value::Null);
                assets.insert(
                    asset_id.clone(),
                    AssetInfo {
                        name: "L-BTC".to_string(),
                        precision: 8,
                        mempool_stats,
                    },
                );
                continue;
            }

            let raw = match outcome {
                Ok(raw) => raw,
                Err(e) => {
                    warn!("Failed to resolve asset {}: {}", asset_id, e);
                    continue;
                }
            };

            let (name, precision) = match (raw.name, raw.precision) {
                (Some(name), Some(precision)) => (name, precision),
                _ => {
                    warn!("Dropping malformed metadata entry for asset {}", asset_id);
                    continue;
                }
            };

            assets.insert(
                asset_id,
                AssetInfo {
                    name,
                    precision,
                    mempool_stats: raw.mempool_stats,
                },
            );
        }

        assets
    }
}
