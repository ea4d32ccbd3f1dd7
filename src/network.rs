//! Network constants for the Coinranking API.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.coinranking.com/v2";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-access-token";

/// Coins per list page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Default transport timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
