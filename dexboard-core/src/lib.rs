//! Core types for the DEX network dashboard
//!
//! This crate defines the shared data structures used across the dashboard,
//! including market representations, asset metadata, and the aggregate
//! result/error shapes produced by one fetch cycle.

pub mod aggregate;
pub mod asset;
pub mod error;
pub mod format;
pub mod market;
pub mod provider;

pub use aggregate::{
    AggregateOutcome, DuplicateEntry, DuplicateGroups, EndpointResult, ErrorObject, ResultObject,
    Stats, ENDPOINT_NOT_AVAILABLE, MARKET_NOT_AVAILABLE,
};
pub use asset::{display_name, AssetInfo, LBTC_ASSET_ID, UNNAMED_ASSET};
pub use error::{DashboardError, DashboardResult};
pub use format::format_decimals;
pub use market::{
    version_consensus, AssetPair, Balances, FeeSide, Fees, MarketData, MarketRecord, MarketV1,
    MarketV2,
};
pub use provider::Provider;
