//! Mirror/duplicate endpoint detection
//!
//! Providers occasionally serve byte-identical market data from different
//! network addresses. Endpoints are grouped by the canonical serialization
//! of their market list; every member of a group is cross-linked to every
//! other member exactly once, never to itself.

use dexboard_core::{DuplicateEntry, DuplicateGroups, ResultObject};
use indexmap::IndexMap;
use tracing::debug;

/// Scan an aggregate for endpoints serving identical market data.
///
/// Endpoints with an empty market list are excluded from comparison. The
/// result maps each duplicate endpoint to the endpoints (and provider
/// display names) sharing its data signature, symmetric and transitively
/// closed within registration order.
pub fn find_duplicates(results: &ResultObject) -> DuplicateGroups {
    // signature -> members (endpoint, display name), in registration order
    let mut by_signature: IndexMap<String, Vec<(String, Option<String>)>> = IndexMap::new();

    for (endpoint, entry) in results {
        if entry.markets.is_empty() {
            continue;
        }
        let signature = serde_json::to_string(&entry.markets)
            .expect("market data always serializes");
        by_signature
            .entry(signature)
            .or_default()
            .push((endpoint.clone(), entry.provider_name.clone()));
    }

    let mut groups = DuplicateGroups::new();
    for members in by_signature.values() {
        if members.len() < 2 {
            continue;
        }
        debug!("Found {} endpoints sharing one data signature", members.len());

        for (endpoint, _) in members {
            let entry = DuplicateEntry {
                endpoints: members
                    .iter()
                    .filter(|(other, _)| other != endpoint)
                    .map(|(other, _)| other.clone())
                    .collect(),
                // unnamed members contribute no name; endpoints never leak
                // into the display-name list
                names: members
                    .iter()
                    .filter(|(other, _)| other != endpoint)
                    .filter_map(|(_, name)| name.clone())
                    .collect(),
            };
            groups.insert(endpoint.clone(), entry);
        }
    }

    groups
}
