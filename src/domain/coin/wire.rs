//! Wire types for the coin list endpoint.

use crate::shared::CoinId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// `GET /coins` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinListResponse {
    #[serde(default)]
    pub status: Option<String>,
    pub data: CoinListData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinListData {
    #[serde(default)]
    pub stats: Option<CoinStats>,
    pub coins: Vec<CoinResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinStats {
    pub total: u64,
    #[serde(default)]
    pub total_market_cap: Option<Decimal>,
    #[serde(default, rename = "total24hVolume")]
    pub total_24h_volume: Option<Decimal>,
}

/// A coin as it appears in the list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinResponse {
    pub uuid: CoinId,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    pub icon_url: String,
    #[serde(default)]
    pub market_cap: Option<Decimal>,
    pub price: Decimal,
    pub change: Decimal,
    pub rank: u32,
    #[serde(default, rename = "24hVolume")]
    pub volume_24h: Option<Decimal>,
    #[serde(default)]
    pub btc_price: Option<Decimal>,
    #[serde(default)]
    pub sparkline: Vec<Option<Decimal>>,
}
