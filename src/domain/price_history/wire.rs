//! Wire types for the coin history endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// `GET /coin/{id}/history` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceHistoryResponse {
    #[serde(default)]
    pub status: Option<String>,
    pub data: PriceHistoryData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceHistoryData {
    #[serde(default)]
    pub change: Option<Decimal>,
    pub history: Vec<HistoryEntry>,
}

/// Entries arrive newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub price: Option<Decimal>,
    pub timestamp: i64,
}
