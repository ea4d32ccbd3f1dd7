//! Coin detail domain — full coin record, supply figures and the detail orchestrator.

mod convert;
pub mod service;
pub mod state;
pub mod wire;

use crate::domain::coin::Coin;
use crate::shared::fmt;
use crate::shared::serde_util::timestamp_s_opt;
use crate::shared::CoinId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use service::CoinDetailService;
pub use state::{CoinDetailState, CoinDetailView, DetailStatus};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllTimeHigh {
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default, with = "timestamp_s_opt")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Supply figures. `max` is absent for coins without a supply cap.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Supply {
    #[serde(default)]
    pub circulating: Option<Decimal>,
    #[serde(default)]
    pub total: Option<Decimal>,
    #[serde(default)]
    pub max: Option<Decimal>,
}

/// Full record for one coin, as returned by the detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinDetail {
    pub id: CoinId,
    pub symbol: String,
    pub name: String,
    pub icon_url: String,
    pub price: Decimal,
    pub change: Decimal,
    pub rank: u32,
    pub color: Option<String>,
    pub btc_price: Option<Decimal>,
    pub market_cap: Option<Decimal>,
    pub volume_24h: Option<Decimal>,
    pub all_time_high: AllTimeHigh,
    pub supply: Supply,
    pub description: Option<String>,
    pub website_url: Option<String>,
    /// Hourly prices, oldest first. `None` marks an interval without a price.
    pub sparkline: Vec<Option<Decimal>>,
}

impl CoinDetail {
    pub fn is_negative_change(&self) -> bool {
        self.change.is_sign_negative() && !self.change.is_zero()
    }

    pub fn formatted_price(&self) -> String {
        fmt::format_price(&self.price)
    }

    pub fn change_text(&self) -> String {
        fmt::change_text(&self.change)
    }

    pub fn formatted_market_cap(&self) -> String {
        fmt::formatted_value(self.market_cap.as_ref())
    }

    pub fn formatted_volume_24h(&self) -> String {
        fmt::formatted_value(self.volume_24h.as_ref())
    }

    pub fn formatted_all_time_high(&self) -> String {
        fmt::formatted_value(self.all_time_high.price.as_ref())
    }

    pub fn formatted_circulating_supply(&self) -> String {
        fmt::formatted_value(self.supply.circulating.as_ref())
    }

    pub fn formatted_total_supply(&self) -> String {
        fmt::formatted_value(self.supply.total.as_ref())
    }

    pub fn formatted_max_supply(&self) -> String {
        fmt::formatted_value(self.supply.max.as_ref())
    }

    /// The list-row projection of this record.
    pub fn summary(&self) -> Coin {
        Coin {
            id: self.id.clone(),
            symbol: self.symbol.clone(),
            name: self.name.clone(),
            icon_url: self.icon_url.clone(),
            price: self.price,
            change: self.change,
            rank: self.rank,
            color: self.color.clone(),
            market_cap: self.market_cap,
            volume_24h: self.volume_24h,
            btc_price: self.btc_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn detail() -> CoinDetail {
        CoinDetail {
            id: CoinId::from("Qwsogvtv82FCd"),
            symbol: "BTC".into(),
            name: "Bitcoin".into(),
            icon_url: "https://cdn.coinranking.com/bOabBYkcX/bitcoin_btc.svg".into(),
            price: Decimal::from_str("65955.126").unwrap(),
            change: Decimal::from_str("-0.45").unwrap(),
            rank: 1,
            color: Some("#f7931A".into()),
            btc_price: Some(Decimal::ONE),
            market_cap: Some(Decimal::from(1_300_000_000_000u64)),
            volume_24h: Some(Decimal::from(31_000_000_000u64)),
            all_time_high: AllTimeHigh {
                price: Some(Decimal::from_str("73750.07").unwrap()),
                timestamp: None,
            },
            supply: Supply {
                circulating: Some(Decimal::from(19_650_000)),
                total: Some(Decimal::from(19_650_000)),
                max: None,
            },
            description: None,
            website_url: None,
            sparkline: Vec::new(),
        }
    }

    #[test]
    fn test_formatted_fields() {
        let d = detail();
        assert_eq!(d.formatted_price(), "$ 65955.13");
        assert_eq!(d.change_text(), "▼ -0.45 %");
        assert!(d.is_negative_change());
        assert_eq!(d.formatted_market_cap(), "1.30T");
        assert_eq!(d.formatted_volume_24h(), "31.00B");
        assert_eq!(d.formatted_all_time_high(), "73,750.07");
        assert_eq!(d.formatted_circulating_supply(), "19.65M");
        assert_eq!(d.formatted_max_supply(), "N/A");
    }

    #[test]
    fn test_summary_keeps_identity() {
        let d = detail();
        let coin = d.summary();
        assert_eq!(coin.id, d.id);
        assert_eq!(coin.rank, 1);
        assert_eq!(coin.market_cap, d.market_cap);
    }
}
