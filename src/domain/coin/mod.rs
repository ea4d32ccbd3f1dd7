//! Coin list domain — list rows, filters, pagination and the list orchestrator.

mod convert;
pub mod cursor;
pub mod filter;
pub mod service;
pub mod state;
pub mod wire;

use crate::shared::fmt;
use crate::shared::CoinId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use cursor::PageCursor;
pub use filter::{FilterState, SortDirection, SortKey};
pub use service::CoinListService;
pub use state::{CoinList, CoinListState};

/// One row of the coin list. Identity is [`Coin::id`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub id: CoinId,
    pub symbol: String,
    pub name: String,
    pub icon_url: String,
    pub price: Decimal,
    /// Percent change over the requested time period.
    pub change: Decimal,
    pub rank: u32,
    pub color: Option<String>,
    pub market_cap: Option<Decimal>,
    pub volume_24h: Option<Decimal>,
    pub btc_price: Option<Decimal>,
}

impl Coin {
    pub fn is_negative_change(&self) -> bool {
        self.change.is_sign_negative() && !self.change.is_zero()
    }

    pub fn formatted_price(&self) -> String {
        fmt::format_price(&self.price)
    }

    pub fn change_text(&self) -> String {
        fmt::change_text(&self.change)
    }
}

/// One decoded page of the list endpoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoinPage {
    pub coins: Vec<Coin>,
    /// Total number of coins the server reports for this query, if it sent stats.
    pub total: Option<u64>,
}
