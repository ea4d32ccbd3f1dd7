//! Wire types for the coin detail endpoint.

use super::{AllTimeHigh, Supply};
use crate::shared::CoinId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// `GET /coin/{id}` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinDetailResponse {
    #[serde(default)]
    pub status: Option<String>,
    pub data: CoinDetailData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinDetailData {
    /// `null` or absent when no coin matches the requested id.
    #[serde(default)]
    pub coin: Option<CoinDetailWire>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinDetailWire {
    pub uuid: CoinId,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    pub icon_url: String,
    #[serde(default)]
    pub website_url: Option<String>,
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
    #[serde(default)]
    pub all_time_high: AllTimeHigh,
    #[serde(default)]
    pub supply: Supply,
}
