//! Detail orchestrator — one coin's record plus its optional price history.

use super::{CoinDetail, CoinDetailService};
use crate::domain::price_history::{ChartWindow, PriceHistoryPoint, PriceHistoryService};
use crate::http::request::{build_detail_request, build_history_request};
use crate::shared::{CoinId, TimePeriod};
use rust_decimal::Decimal;
use tokio::sync::watch;

/// Resolution of the latest detail fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailStatus {
    #[default]
    Loading,
    Loaded(CoinDetail),
    /// The response was well formed but held no coin.
    Empty,
    Error,
}

impl DetailStatus {
    pub fn detail(&self) -> Option<&CoinDetail> {
        match self {
            DetailStatus::Loaded(detail) => Some(detail),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, DetailStatus::Loaded(_))
    }
}

/// Snapshot of a detail orchestrator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoinDetailState {
    status: DetailStatus,
    /// `None` until a history fetch succeeds, and again after one fails.
    history: Option<Vec<PriceHistoryPoint>>,
    selected_window: ChartWindow,
    detail_seq: u64,
    history_seq: u64,
}

impl CoinDetailState {
    pub fn status(&self) -> &DetailStatus {
        &self.status
    }

    pub fn history(&self) -> Option<&[PriceHistoryPoint]> {
        self.history.as_deref()
    }

    pub fn selected_window(&self) -> ChartWindow {
        self.selected_window
    }

    /// History prices inside `window`, oldest first.
    ///
    /// Empty unless a detail is loaded and history is present. Points without a price are skipped.
    pub fn filtered_history(&self, window: ChartWindow) -> Vec<Decimal> {
        let (true, Some(history)) = (self.status.is_loaded(), self.history.as_deref()) else {
            return Vec::new();
        };
        window.apply(history).iter().filter_map(|p| p.price).collect()
    }

    /// Sparkline prices of the loaded detail inside `window`.
    pub fn filtered_sparkline(&self, window: ChartWindow) -> Vec<Decimal> {
        match self.status.detail() {
            Some(detail) => window.apply(&detail.sparkline).iter().flatten().copied().collect(),
            None => Vec::new(),
        }
    }
}

/// Detail and price history for a single coin.
///
/// The two fetches are independent and may overlap. Only the most recently
/// issued fetch of each kind writes its result. Nothing is retried.
pub struct CoinDetailView<D, H> {
    id: CoinId,
    detail_service: D,
    history_service: H,
    state: watch::Sender<CoinDetailState>,
}

impl<D: CoinDetailService, H: PriceHistoryService> CoinDetailView<D, H> {
    pub fn new(id: CoinId, detail_service: D, history_service: H) -> Self {
        let (state, _) = watch::channel(CoinDetailState::default());
        Self {
            id,
            detail_service,
            history_service,
            state,
        }
    }

    pub fn id(&self) -> &CoinId {
        &self.id
    }

    pub fn subscribe(&self) -> watch::Receiver<CoinDetailState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> CoinDetailState {
        self.state.borrow().clone()
    }

    pub fn status(&self) -> DetailStatus {
        self.state.borrow().status.clone()
    }

    pub fn history(&self) -> Option<Vec<PriceHistoryPoint>> {
        self.state.borrow().history.clone()
    }

    pub fn selected_window(&self) -> ChartWindow {
        self.state.borrow().selected_window
    }

    pub fn select_window(&self, window: ChartWindow) {
        self.state.send_if_modified(|state| {
            let changed = state.selected_window != window;
            state.selected_window = window;
            changed
        });
    }

    pub fn filtered_history(&self, window: ChartWindow) -> Vec<Decimal> {
        self.state.borrow().filtered_history(window)
    }

    pub fn filtered_sparkline(&self, window: ChartWindow) -> Vec<Decimal> {
        self.state.borrow().filtered_sparkline(window)
    }

    /// [`Self::filtered_history`] for the selected window.
    pub fn chart_prices(&self) -> Vec<Decimal> {
        let state = self.state.borrow();
        state.filtered_history(state.selected_window)
    }

    /// Fetch the coin record. Moves to `Loading`, then `Loaded`, `Empty` or `Error`.
    pub async fn fetch_detail(&self, time_period: TimePeriod) {
        let mut seq = 0;
        self.state.send_modify(|state| {
            state.detail_seq = state.detail_seq.wrapping_add(1);
            seq = state.detail_seq;
            state.status = DetailStatus::Loading;
        });

        let request = build_detail_request(&self.id, time_period);
        tracing::debug!(coin = %self.id, %time_period, "Fetching coin detail");
        let result = self.detail_service.fetch_coin_detail(&request).await;

        self.state.send_if_modified(|state| {
            if state.detail_seq != seq {
                return false;
            }
            state.status = match result {
                Ok(Some(detail)) => DetailStatus::Loaded(detail),
                Ok(None) => {
                    tracing::debug!(coin = %self.id, "No coin in detail response");
                    DetailStatus::Empty
                }
                Err(e) => {
                    tracing::warn!(coin = %self.id, error = %e, kind = ?e.kind(), "Coin detail failed");
                    DetailStatus::Error
                }
            };
            true
        });
    }

    /// Fetch price history. On failure history becomes absent, never empty.
    pub async fn fetch_price_history(&self, time_period: TimePeriod) {
        let mut seq = 0;
        self.state.send_modify(|state| {
            state.history_seq = state.history_seq.wrapping_add(1);
            seq = state.history_seq;
        });

        let request = build_history_request(&self.id, time_period);
        tracing::debug!(coin = %self.id, %time_period, "Fetching price history");
        let result = self.history_service.fetch_price_history(&request).await;

        self.state.send_if_modified(|state| {
            if state.history_seq != seq {
                return false;
            }
            state.history = match result {
                Ok(points) => Some(points),
                Err(e) => {
                    tracing::warn!(coin = %self.id, error = %e, kind = ?e.kind(), "Price history failed");
                    None
                }
            };
            true
        });
    }
}

impl<D, H> std::fmt::Debug for CoinDetailView<D, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinDetailView")
            .field("id", &self.id)
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}
