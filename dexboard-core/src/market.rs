//! Market data structures
//!
//! Two incompatible revisions of the market wire protocol exist. The legacy
//! ("v1") form expresses fees as a shared basis point plus fixed base/quote
//! fees; the current ("v2") form carries independent fixed and percentage
//! fees per asset. A record's version is inferred once at deserialization
//! and carried as a tag, never re-sniffed downstream.

use serde::{Deserialize, Deserializer, Serialize};

/// An unordered-but-fixed pair of opaque asset identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPair {
    pub base_asset: String,
    pub quote_asset: String,
}

/// Deserialize a numeric or string wire amount into its string form.
///
/// Providers are inconsistent about whether amounts are JSON numbers or
/// strings; everything downstream treats them as opaque decimal strings.
pub(crate) fn de_amount<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Number(serde_json::Number),
        Text(String),
    }

    Ok(match Amount::deserialize(deserializer)? {
        Amount::Number(n) => n.to_string(),
        Amount::Text(s) => s,
    })
}

/// Legacy fee terms: one basis-point percentage shared by both assets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeV1 {
    #[serde(deserialize_with = "de_amount")]
    pub basis_point: String,
    pub fixed: FixedFeeV1,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedFeeV1 {
    #[serde(deserialize_with = "de_amount")]
    pub base_fee: String,
    #[serde(deserialize_with = "de_amount")]
    pub quote_fee: String,
}

/// Current fee terms: fixed and percentage fees per asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeV2 {
    pub fixed_fee: FeeAmountsV2,
    pub percentage_fee: FeeAmountsV2,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeAmountsV2 {
    #[serde(deserialize_with = "de_amount")]
    pub base_asset: String,
    #[serde(deserialize_with = "de_amount")]
    pub quote_asset: String,
}

/// A legacy-protocol market listing entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MarketV1 {
    pub market: AssetPair,
    pub fee: FeeV1,
}

/// A current-protocol market listing entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MarketV2 {
    pub market: AssetPair,
    pub fee: FeeV2,
}

/// A market listing entry of either protocol revision.
///
/// The v2 shape is tried first; anything carrying the legacy fee fields
/// falls through to v1.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MarketRecord {
    V2(MarketV2),
    V1(MarketV1),
}

impl MarketRecord {
    /// The asset pair identifying this market
    pub fn pair(&self) -> &AssetPair {
        match self {
            MarketRecord::V1(m) => &m.market,
            MarketRecord::V2(m) => &m.market,
        }
    }

    /// Whether this record was served in the legacy shape
    pub fn is_v1(&self) -> bool {
        matches!(self, MarketRecord::V1(_))
    }

    /// Map the version-specific fee fields into the unified output form
    pub fn fees(&self) -> Fees {
        match self {
            MarketRecord::V1(m) => Fees {
                base_fee: FeeSide {
                    fixed: m.fee.fixed.base_fee.clone(),
                    percentage: m.fee.basis_point.clone(),
                },
                quote_fee: FeeSide {
                    fixed: m.fee.fixed.quote_fee.clone(),
                    percentage: m.fee.basis_point.clone(),
                },
            },
            MarketRecord::V2(m) => Fees {
                base_fee: FeeSide {
                    fixed: m.fee.fixed_fee.base_asset.clone(),
                    percentage: m.fee.percentage_fee.base_asset.clone(),
                },
                quote_fee: FeeSide {
                    fixed: m.fee.fixed_fee.quote_asset.clone(),
                    percentage: m.fee.percentage_fee.quote_asset.clone(),
                },
            },
        }
    }
}

/// Unified fee terms on a merged market record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fees {
    pub base_fee: FeeSide,
    pub quote_fee: FeeSide,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeSide {
    pub fixed: String,
    pub percentage: String,
}

/// Resolved balances for both sides of a market
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balances {
    #[serde(deserialize_with = "de_amount")]
    pub base_amount: String,
    #[serde(deserialize_with = "de_amount")]
    pub quote_amount: String,
}

/// Placeholder rendered when a market's tradeable amount could not be fetched
pub const AMOUNT_UNAVAILABLE: &str = "N/A";

/// One merged per-market record, immutable once constructed.
///
/// `v1` is a three-way consensus over the underlying price/balance lookups:
/// `Some(true)` iff every lookup was legacy, `Some(false)` iff none was,
/// `None` when lookups disagreed or none resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketData {
    pub base_asset: String,
    pub quote_asset: String,
    pub balances: Option<Balances>,
    pub spot_price: Option<f64>,
    pub min_tradeable_amount: String,
    pub fees: Fees,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v1: Option<bool>,
}

impl MarketData {
    /// Placeholder record for a listed market whose price probe failed
    pub fn unavailable(record: &MarketRecord) -> Self {
        let pair = record.pair();
        Self {
            base_asset: pair.base_asset.clone(),
            quote_asset: pair.quote_asset.clone(),
            balances: None,
            spot_price: None,
            min_tradeable_amount: AMOUNT_UNAVAILABLE.to_string(),
            fees: record.fees(),
            v1: None,
        }
    }

    /// A market is tradable when both balance fields resolved
    pub fn is_tradable(&self) -> bool {
        self.balances.is_some()
    }
}

/// Fold a set of per-lookup legacy flags into the three-way version consensus
pub fn version_consensus(flags: &[bool]) -> Option<bool> {
    if flags.is_empty() {
        return None;
    }
    if flags.iter().all(|&f| f) {
        Some(true)
    } else if flags.iter().all(|&f| !f) {
        Some(false)
    } else {
        None
    }
}
