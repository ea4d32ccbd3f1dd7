//! # CoinRanking SDK
//!
//! A Rust client for the Coinranking API: a paginated, sortable coin list,
//! per-coin detail with price history, and locally persisted favorites.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, formatting, domain slices and their orchestrators
//! 2. **HTTP** — Request descriptors, the `Transport` seam and the fetch-and-decode `Pipeline`
//! 3. **High-Level Client** — `CoinRankingClient` wiring one pipeline and one favorites store
//!    into every orchestrator it hands out
//!
//! Orchestrators publish their state through `tokio::sync::watch` channels; call
//! `subscribe()` to observe transitions or read a `snapshot()`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coinranking_sdk::prelude::*;
//!
//! let client = CoinRankingClient::builder()
//!     .api_key("your-key")
//!     .favorites_path("favorites.json")
//!     .build()?;
//!
//! let list = client.coin_list();
//! list.fetch_coins().await;
//! list.apply_filter(FilterState::new(Some(SortKey::Change), Some(SortDirection::Descending))).await;
//!
//! let detail = client.coin_detail("Qwsogvtv82FCd");
//! detail.fetch_detail(TimePeriod::Hour24).await;
//! detail.fetch_price_history(TimePeriod::Day7).await;
//! let prices = detail.filtered_history(ChartWindow::SevenDays);
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and formatting used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, services, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network constants.
pub mod network;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// Request descriptors, transport and fetch-and-decode pipeline.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `CoinRankingClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{CoinId, TimePeriod};

    // Formatting
    pub use crate::shared::fmt::{
        change_text, format_large_number, format_price, formatted_value, LargeNumberUnit,
    };

    // Domain types — coin list
    pub use crate::domain::coin::{
        Coin, CoinList, CoinListService, CoinListState, CoinPage, FilterState, PageCursor,
        SortDirection, SortKey,
    };

    // Domain types — detail, price history
    pub use crate::domain::detail::{
        AllTimeHigh, CoinDetail, CoinDetailService, CoinDetailState, CoinDetailView,
        DetailStatus, Supply,
    };
    pub use crate::domain::price_history::{ChartWindow, PriceHistoryPoint, PriceHistoryService};

    // Domain types — favorites
    pub use crate::domain::favorites::{
        FavoriteRecord, FavoriteSet, Favorites, FavoritesStore, JsonFileStore, MemoryStore,
    };

    // Errors
    pub use crate::error::{
        DecodingError, FetchError, FetchErrorKind, RequestError, SdkError, StoreError,
        TransportError,
    };

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP
    #[cfg(feature = "http")]
    pub use crate::http::ReqwestTransport;
    pub use crate::http::{Pipeline, RequestDescriptor, Transport};

    // Client
    pub use crate::client::{CoinRankingClient, CoinRankingClientBuilder};
}
