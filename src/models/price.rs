use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// PriceBar — Single OHLC aggregate (query result)
// ---------------------------------------------------------------------------

/// OHLC-style aggregate over one time bucket of a token's trading price.
///
/// Price fields are decimal strings; `count` is the number of trades folded
/// into the bucket, also as a decimal string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBar {
    pub id: i64,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub average: String,
    pub count: String,
}

// ---------------------------------------------------------------------------
// PriceSeries — Ordered page of price bars
// ---------------------------------------------------------------------------

/// Price bars in the order the indexer served them (ascending bucket id).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSeries {
    pub items: Vec<PriceBar>,
}
