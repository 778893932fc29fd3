//! Asset metadata

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Asset identifier of the network's native bitcoin peg.
///
/// This identifier always resolves to "L-BTC" with precision 8 regardless of
/// what the metadata source reports for its name/precision; the source's
/// mempool stats are still passed through.
pub const LBTC_ASSET_ID: &str = "6f0279e9ed041c3d710a9f57d0c02928416460c4b722ae3457a11eef381c9773";

/// Placeholder rendered for assets without a resolved metadata entry
pub const UNNAMED_ASSET: &str = "Unnamed asset";

/// Descriptive metadata for one asset identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetInfo {
    pub name: String,
    pub precision: u8,
    /// Opaque network activity stats, passed through from the metadata source
    #[serde(default)]
    pub mempool_stats: serde_json::Value,
}

/// Display name for an asset identifier within a resolved mapping, falling
/// back to the unnamed placeholder when resolution dropped or never saw
/// the identifier
pub fn display_name<'a>(assets: &'a HashMap<String, AssetInfo>, asset_id: &str) -> &'a str {
    assets
        .get(asset_id)
        .map(|info| info.name.as_str())
        .unwrap_or(UNNAMED_ASSET)
}
