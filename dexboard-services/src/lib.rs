//! Aggregation pipeline services for the DEX network dashboard
//!
//! This crate provides the service layer that orchestrates the endpoint
//! prober across providers and markets, post-processes the aggregate for
//! mirror detection, derives dashboard counters, and supplies the provider
//! registry with its bundled fallback.

pub mod aggregator;
pub mod duplicates;
pub mod registry;
pub mod stats;

pub use aggregator::AggregationService;
pub use duplicates::find_duplicates;
pub use registry::{fallback_providers, ProviderRegistry, DEFAULT_REGISTRY_URL};
pub use stats::summarize;
