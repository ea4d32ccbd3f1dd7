//! List orchestrator — pagination cursor, accumulated rows, in-flight guard and filter.

use super::{Coin, CoinListService, FilterState, PageCursor};
use crate::domain::favorites::Favorites;
use crate::error::SdkError;
use crate::http::request::{build_list_request, RequestDescriptor};
use crate::network::DEFAULT_PAGE_SIZE;
use crate::shared::{CoinId, TimePeriod};
use std::sync::Arc;
use tokio::sync::watch;

/// Snapshot of one list session.
///
/// `coins` only grows and `cursor` only advances until the next filter change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoinListState {
    coins: Vec<Coin>,
    is_fetching: bool,
    filter: FilterState,
    cursor: PageCursor,
    total: Option<u64>,
    generation: u64,
}

impl CoinListState {
    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    pub fn is_fetching(&self) -> bool {
        self.is_fetching
    }

    pub fn filter(&self) -> FilterState {
        self.filter
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    /// Total reported by the last merged page, if the server sent stats.
    pub fn total(&self) -> Option<u64> {
        self.total
    }

    pub fn coin(&self, id: &CoinId) -> Option<&Coin> {
        self.coins.iter().find(|c| &c.id == id)
    }
}

/// Paginated, filterable coin list.
///
/// Failures are absorbed: a failed first page leaves an empty list, a failed
/// later page leaves the list as it was. Nothing is retried.
pub struct CoinList<S> {
    service: S,
    favorites: Arc<Favorites>,
    page_size: u32,
    time_period: TimePeriod,
    state: watch::Sender<CoinListState>,
}

impl<S: CoinListService> CoinList<S> {
    pub fn new(service: S, favorites: Arc<Favorites>) -> Self {
        let (state, _) = watch::channel(CoinListState::default());
        Self {
            service,
            favorites,
            page_size: DEFAULT_PAGE_SIZE,
            time_period: TimePeriod::default(),
            state,
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_time_period(mut self, time_period: TimePeriod) -> Self {
        self.time_period = time_period;
        self
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn time_period(&self) -> TimePeriod {
        self.time_period
    }

    pub fn favorites(&self) -> &Arc<Favorites> {
        &self.favorites
    }

    /// Receiver that always holds the latest [`CoinListState`].
    pub fn subscribe(&self) -> watch::Receiver<CoinListState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> CoinListState {
        self.state.borrow().clone()
    }

    pub fn coins(&self) -> Vec<Coin> {
        self.state.borrow().coins.clone()
    }

    pub fn is_fetching(&self) -> bool {
        self.state.borrow().is_fetching
    }

    pub fn cursor(&self) -> PageCursor {
        self.state.borrow().cursor
    }

    pub fn filter(&self) -> FilterState {
        self.state.borrow().filter
    }

    /// Offset of the page the next fetch will request.
    pub fn offset(&self) -> u32 {
        self.state.borrow().cursor.offset(self.page_size)
    }

    /// Descriptor the next fetch would send.
    pub fn list_request(&self) -> RequestDescriptor {
        let state = self.state.borrow();
        build_list_request(state.cursor, self.page_size, self.time_period, &state.filter)
    }

    /// Fetch the page at the cursor and append it.
    ///
    /// Does nothing while another list fetch is in flight.
    pub async fn fetch_coins(&self) {
        let mut started = None;
        self.state.send_if_modified(|state| {
            if state.is_fetching {
                return false;
            }
            state.is_fetching = true;
            let request =
                build_list_request(state.cursor, self.page_size, self.time_period, &state.filter);
            started = Some((state.generation, request));
            true
        });

        let Some((generation, request)) = started else {
            tracing::trace!("List fetch already in flight, skipping");
            return;
        };

        tracing::debug!(
            offset = request.query_param("offset").unwrap_or_default(),
            limit = self.page_size,
            "Fetching coin page"
        );
        let result = self.service.fetch_coin_list(&request).await;

        self.state.send_if_modified(|state| {
            if state.generation != generation {
                tracing::debug!("Discarding coin page from a reset session");
                return false;
            }
            state.is_fetching = false;
            match result {
                Ok(page) => {
                    tracing::debug!(
                        page = state.cursor.page(),
                        received = page.coins.len(),
                        "Merged coin page"
                    );
                    state.coins.extend(page.coins);
                    state.total = page.total.or(state.total);
                    state.cursor.advance();
                }
                Err(e) if state.cursor.is_first_page() => {
                    tracing::warn!(error = %e, kind = ?e.kind(), "First coin page failed");
                    state.coins.clear();
                }
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        kind = ?e.kind(),
                        page = state.cursor.page(),
                        "Loading more coins failed"
                    );
                }
            }
            true
        });
    }

    /// Same code path as [`CoinList::fetch_coins`]; the cursor decides the page.
    pub async fn fetch_more_coins(&self) {
        self.fetch_coins().await
    }

    /// Start a new session with `filter` and fetch its first page.
    ///
    /// A fetch still in flight from the previous session is discarded when it completes.
    pub async fn apply_filter(&self, filter: FilterState) {
        self.state.send_modify(|state| {
            state.generation = state.generation.wrapping_add(1);
            state.filter = filter;
            state.cursor.reset();
            state.coins.clear();
            state.total = None;
            state.is_fetching = false;
        });
        tracing::debug!(?filter, "Applied coin filter");
        self.fetch_coins().await
    }

    pub async fn reset_filter(&self) {
        self.apply_filter(FilterState::default()).await
    }

    /// Toggle a coin from the current list in the favorites store.
    ///
    /// Returns whether the coin is a favorite afterwards.
    pub fn toggle_favorite(&self, id: &CoinId) -> Result<bool, SdkError> {
        let coin = self
            .state
            .borrow()
            .coin(id)
            .cloned()
            .ok_or_else(|| SdkError::UnknownCoin(id.clone()))?;
        Ok(self.favorites.toggle(&coin)?)
    }

    pub fn is_favorite(&self, id: &CoinId) -> bool {
        self.favorites.contains(id)
    }
}

impl<S> std::fmt::Debug for CoinList<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinList")
            .field("page_size", &self.page_size)
            .field("time_period", &self.time_period)
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}
