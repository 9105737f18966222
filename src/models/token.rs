use serde::{Deserialize, Serialize};

use crate::models::price::PriceSeries;

// ---------------------------------------------------------------------------
// Token — Summary of an indexed launchpad token
// ---------------------------------------------------------------------------

/// Summary of an indexed launchpad token, as served by the list query.
///
/// Decimal figures travel as strings to preserve on-chain precision.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub id: String,
    pub address: String,
    pub chain_id: u64,
    pub creator: String,
    pub name: String,
    pub symbol: String,
    pub market_cap: String,
    pub description: String,
    pub logo_url: String,
    /// Creation timestamp as reported by the indexer.
    pub timestamp: String,
}

// ---------------------------------------------------------------------------
// TokenDetail — Summary plus migration state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDetail {
    #[serde(flatten)]
    pub token: Token,
    pub is_migrated: bool,
    /// Liquidity-pool address, present once the token has migrated.
    pub lp_address: Option<String>,
}

// ---------------------------------------------------------------------------
// TokenWithPrices — Full detail including price-bar history
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenWithPrices {
    #[serde(flatten)]
    pub detail: TokenDetail,
    pub prices: PriceSeries,
}
