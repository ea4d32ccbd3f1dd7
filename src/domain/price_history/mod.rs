//! Price history domain — chart points and client-side chart windows.

mod convert;
pub mod service;
pub mod wire;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub use service::PriceHistoryService;

/// One point of a coin's price history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceHistoryPoint {
    #[serde(with = "crate::shared::serde_util::timestamp_s")]
    pub timestamp: DateTime<Utc>,
    /// `None` where the API had no price for the interval.
    pub price: Option<Decimal>,
}

/// Client-side chart window over an already fetched series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartWindow {
    #[default]
    #[serde(rename = "1D")]
    TwentyFourHours,
    #[serde(rename = "7D")]
    SevenDays,
    #[serde(rename = "1M")]
    ThirtyDays,
}

impl ChartWindow {
    pub const ALL: [ChartWindow; 3] = [
        ChartWindow::TwentyFourHours,
        ChartWindow::SevenDays,
        ChartWindow::ThirtyDays,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ChartWindow::TwentyFourHours => "1D",
            ChartWindow::SevenDays => "7D",
            ChartWindow::ThirtyDays => "1M",
        }
    }

    /// Number of most recent points kept, assuming hourly cadence. `None` keeps all.
    pub fn point_limit(&self) -> Option<usize> {
        match self {
            ChartWindow::TwentyFourHours => Some(24),
            ChartWindow::SevenDays => Some(7 * 24),
            ChartWindow::ThirtyDays => None,
        }
    }

    /// The most recent points of a chronological `series` that fall in this window.
    pub fn apply<'a, T>(&self, series: &'a [T]) -> &'a [T] {
        match self.point_limit() {
            Some(limit) => &series[series.len().saturating_sub(limit)..],
            None => series,
        }
    }
}

impl std::fmt::Display for ChartWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ChartWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1D" | "1d" => Ok(ChartWindow::TwentyFourHours),
            "7D" | "7d" => Ok(ChartWindow::SevenDays),
            "1M" | "1m" => Ok(ChartWindow::ThirtyDays),
            _ => Err(format!("Unknown chart window: {}", s)),
        }
    }
}
