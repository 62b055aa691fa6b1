use serde::{Deserialize, Serialize};

/// One quoted instrument (index, commodity, or currency pair) at a point
/// in time. Values are display strings exactly as reported by the
/// provider and are never recomputed locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexMetric {
    pub value: String,
    pub change: String,
    pub percent_change: String,
    /// Sign of `change`, precomputed by the provider.
    pub is_positive: bool,
}

/// The three benchmark indices tracked by a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexBoard {
    pub nifty50: IndexMetric,
    pub sensex: IndexMetric,
    pub nifty_bank: IndexMetric,
}

/// Commodity and FX quotes: gold (10g), Brent crude, USD/INR.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommodityBoard {
    pub gold: IndexMetric,
    pub oil: IndexMetric,
    pub usd_inr: IndexMetric,
}
