//! Provider identity

use serde::{Deserialize, Serialize};

/// Suffix used by hosts reachable only over the anonymizing overlay network
pub const ONION_SUFFIX: &str = ".onion";

/// A network-addressable service exposing the market protocol.
///
/// `onion` is derived from the endpoint hostname, never stored
/// authoritatively by a registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    pub name: String,
    pub endpoint: String,
    #[serde(default)]
    pub onion: bool,
}

impl Provider {
    /// Create a provider, deriving the `onion` flag from the endpoint
    pub fn new(name: impl Into<String>, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        let onion = endpoint_is_onion(&endpoint);
        Self {
            name: name.into(),
            endpoint,
            onion,
        }
    }
}

/// True iff the endpoint's hostname ends in the anonymizing-network suffix
pub fn endpoint_is_onion(endpoint: &str) -> bool {
    let without_scheme = endpoint
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(endpoint);
    let host = without_scheme
        .split(['/', ':'])
        .next()
        .unwrap_or(without_scheme);
    host.ends_with(ONION_SUFFIX)
}
