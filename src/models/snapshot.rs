use serde::{Deserialize, Serialize};

use crate::models::breadth::BreadthStat;
use crate::models::flows::InstitutionalFlow;
use crate::models::metric::{CommodityBoard, IndexBoard};
use crate::models::movers::StockMovement;

/// A grounding citation the provider claims to have consulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRef {
    pub uri: String,
    pub title: String,
}

/// One point-in-time bundle of market figures for a single trading day.
///
/// Created fresh on every fetch and never mutated afterwards. All
/// sections are required: a payload missing any of them fails to parse
/// rather than producing a partial snapshot. `sources` is filled in from
/// grounding metadata after the payload is parsed and may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSnapshot {
    pub date: String,
    pub indices: IndexBoard,
    pub commodities: CommodityBoard,
    pub gainers: Vec<StockMovement>,
    pub losers: Vec<StockMovement>,
    pub advance_decline: BreadthStat,
    pub fii: InstitutionalFlow,
    pub dii: InstitutionalFlow,
    #[serde(default)]
    pub sources: Vec<SourceRef>,
}
