//! Provider wire-protocol client
//!
//! One HTTP-style probe per logical operation against a single provider
//! endpoint, with a transparent retry on the legacy protocol path when the
//! current one reports "not found", typed classification of transport-level
//! failures, and gateway rewriting for anonymizing-network hosts.

pub mod client;
pub mod onion;
pub mod types;

pub use client::{ProbeError, Probed, ProviderClient};
pub use onion::rewrite_onion_endpoint;
pub use types::{BalanceResponse, ListMarketsResponse, PriceResponse};
