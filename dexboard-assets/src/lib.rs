//! Asset metadata resolution
//!
//! Markets reference assets only by opaque identifier; this crate fetches
//! descriptive metadata (display name, decimal precision, network activity
//! stats) for every identifier referenced by an aggregate, independently and
//! in parallel, tolerating individual lookup failures.

pub mod client;
pub mod resolver;

pub use client::{AssetRegistryClient, DEFAULT_ASSET_API};
pub use resolver::AssetResolver;
