use serde::{Deserialize, Serialize};

/// One row of a top-gainers or top-losers table. List position is rank
/// order (first entry is the biggest mover) and must be preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockMovement {
    pub company: String,
    pub price: String,
    pub percent_change: String,
}
