use serde::{Deserialize, Serialize};

/// Gross purchase, gross sales, and net figures reported for a single
/// period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowFigures {
    pub gross_purchase: String,
    pub gross_sales: String,
    pub net: String,
}

/// Institutional cash-segment activity: daily and month-to-date views of
/// the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstitutionalFlow {
    pub daily: FlowFigures,
    pub mtd: FlowFigures,
}
