use serde::{Deserialize, Serialize};

/// Market-wide advancing/declining stock counts for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadthStat {
    pub advances: u32,
    pub declines: u32,
    pub advance_percent: String,
    pub decline_percent: String,
}
