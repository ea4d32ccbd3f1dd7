//! High-level client — `CoinRankingClient` with orchestrator accessors.
//!
//! The client owns one fetch pipeline and one favorites adapter. Every
//! orchestrator it hands out shares both.

use crate::domain::coin::CoinList;
use crate::domain::detail::CoinDetailView;
use crate::domain::favorites::{Favorites, JsonFileStore};
use crate::error::SdkError;
use crate::http::{Pipeline, Transport};
use crate::network::{DEFAULT_API_URL, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS};
use crate::shared::{CoinId, TimePeriod};

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "COINRANKING_API_URL";
/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "COINRANKING_API_KEY";
/// Environment variable pointing at the favorites JSON file.
pub const ENV_FAVORITES_PATH: &str = "COINRANKING_FAVORITES_PATH";

/// The primary entry point for the SDK.
pub struct CoinRankingClient<T> {
    pipeline: Arc<Pipeline<T>>,
    favorites: Arc<Favorites>,
    page_size: u32,
    time_period: TimePeriod,
}

#[cfg(feature = "http")]
impl CoinRankingClient<crate::http::ReqwestTransport> {
    /// Builder for a reqwest-backed client.
    ///
    /// The `http` feature alone compiles reqwest without a TLS backend, so the
    /// HTTPS [`DEFAULT_API_URL`] is only reachable with the `native` feature
    /// enabled.
    pub fn builder() -> CoinRankingClientBuilder {
        CoinRankingClientBuilder::default()
    }
}

impl<T: Transport> CoinRankingClient<T> {
    /// A paginated list wired to this client's pipeline and favorites.
    pub fn coin_list(&self) -> CoinList<Arc<Pipeline<T>>> {
        CoinList::new(self.pipeline.clone(), self.favorites.clone())
            .with_page_size(self.page_size)
            .with_time_period(self.time_period)
    }

    /// Detail and price history for one coin.
    pub fn coin_detail(
        &self,
        id: impl Into<CoinId>,
    ) -> CoinDetailView<Arc<Pipeline<T>>, Arc<Pipeline<T>>> {
        CoinDetailView::new(id.into(), self.pipeline.clone(), self.pipeline.clone())
    }

    pub fn favorites(&self) -> &Arc<Favorites> {
        &self.favorites
    }

    pub fn pipeline(&self) -> &Arc<Pipeline<T>> {
        &self.pipeline
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn time_period(&self) -> TimePeriod {
        self.time_period
    }
}

impl<T> Clone for CoinRankingClient<T> {
    fn clone(&self) -> Self {
        Self {
            pipeline: self.pipeline.clone(),
            favorites: self.favorites.clone(),
            page_size: self.page_size,
            time_period: self.time_period,
        }
    }
}

impl<T: Transport> std::fmt::Debug for CoinRankingClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinRankingClient")
            .field("base_url", &self.pipeline.base_url())
            .field("page_size", &self.page_size)
            .field("time_period", &self.time_period)
            .finish_non_exhaustive()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CoinRankingClientBuilder {
    base_url: String,
    api_key: Option<String>,
    page_size: u32,
    time_period: TimePeriod,
    timeout: Duration,
    favorites_path: Option<PathBuf>,
    favorites: Option<Arc<Favorites>>,
}

impl Default for CoinRankingClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            page_size: DEFAULT_PAGE_SIZE,
            time_period: TimePeriod::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            favorites_path: None,
            favorites: None,
        }
    }
}

impl CoinRankingClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `COINRANKING_API_URL`, `COINRANKING_API_KEY` and
    /// `COINRANKING_FAVORITES_PATH` when they are set and non-empty.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        let mut builder = Self::default();
        if let Some(url) = var(ENV_API_URL) {
            builder.base_url = url;
        }
        builder.api_key = var(ENV_API_KEY);
        builder.favorites_path = var(ENV_FAVORITES_PATH).map(PathBuf::from);
        builder
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn time_period(mut self, time_period: TimePeriod) -> Self {
        self.time_period = time_period;
        self
    }

    /// Transport timeout. Only used by [`CoinRankingClientBuilder::build`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Persist favorites as JSON at `path`. Without it favorites live in memory.
    pub fn favorites_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.favorites_path = Some(path.into());
        self
    }

    /// Share an existing favorites adapter. Takes precedence over `favorites_path`.
    pub fn favorites(mut self, favorites: Arc<Favorites>) -> Self {
        self.favorites = Some(favorites);
        self
    }

    /// Build with the `reqwest` transport.
    #[cfg(feature = "http")]
    pub fn build(self) -> Result<CoinRankingClient<crate::http::ReqwestTransport>, SdkError> {
        let transport = crate::http::ReqwestTransport::new(self.timeout)
            .map_err(|e| SdkError::Config(format!("HTTP client: {}", e)))?;
        self.build_with_transport(transport)
    }

    /// Build on top of a caller-supplied transport.
    pub fn build_with_transport<T: Transport>(
        self,
        transport: T,
    ) -> Result<CoinRankingClient<T>, SdkError> {
        if self.page_size == 0 {
            return Err(SdkError::Config("page size must be positive".to_string()));
        }

        let pipeline = Pipeline::new(&self.base_url, transport)
            .map_err(|e| SdkError::Config(e.to_string()))?
            .with_api_key(self.api_key);

        let favorites = match (self.favorites, self.favorites_path) {
            (Some(favorites), _) => favorites,
            (None, Some(path)) => {
                tracing::debug!(path = %path.display(), "Loading favorites");
                Arc::new(Favorites::new(JsonFileStore::new(path))?)
            }
            (None, None) => Arc::new(Favorites::in_memory()),
        };

        Ok(CoinRankingClient {
            pipeline: Arc::new(pipeline),
            favorites,
            page_size: self.page_size,
            time_period: self.time_period,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::http::HttpRequest;
    use async_trait::async_trait;

    struct Offline;

    #[async_trait]
    impl Transport for Offline {
        async fn send(&self, _request: HttpRequest) -> Result<Vec<u8>, TransportError> {
            Err(TransportError::Other("offline".into()))
        }
    }

    #[test]
    fn test_builder_defaults() {
        let client = CoinRankingClientBuilder::new()
            .build_with_transport(Offline)
            .unwrap();
        assert_eq!(client.pipeline().base_url(), DEFAULT_API_URL);
        assert_eq!(client.page_size(), 20);
        assert_eq!(client.time_period(), TimePeriod::Hour24);
        assert!(client.favorites().snapshot().is_empty());
    }

    #[test]
    fn test_debug_shows_base_url() {
        let client = CoinRankingClientBuilder::new()
            .base_url("https://api.test/v2")
            .build_with_transport(Offline)
            .unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.starts_with("CoinRankingClient"));
        assert!(debug.contains("https://api.test/v2"));
    }

    #[test]
    fn test_builder_rejects_bad_config() {
        let err = CoinRankingClientBuilder::new()
            .base_url("::nope")
            .build_with_transport(Offline)
            .unwrap_err();
        assert!(matches!(err, SdkError::Config(_)));

        let err = CoinRankingClientBuilder::new()
            .page_size(0)
            .build_with_transport(Offline)
            .unwrap_err();
        assert!(matches!(err, SdkError::Config(_)));
    }

    #[test]
    fn test_orchestrators_share_favorites() {
        let favorites = Arc::new(Favorites::in_memory());
        let client = CoinRankingClientBuilder::new()
            .page_size(5)
            .time_period(TimePeriod::Day7)
            .favorites(favorites.clone())
            .build_with_transport(Offline)
            .unwrap();

        let list = client.coin_list();
        assert!(Arc::ptr_eq(list.favorites(), &favorites));
        assert_eq!(list.page_size(), 5);
        assert_eq!(list.list_request().query_param("timePeriod"), Some("7d"));

        let detail = client.coin_detail("Qwsogvtv82FCd");
        assert_eq!(detail.id().as_str(), "Qwsogvtv82FCd");
    }
}
