//! Coin list service — the seam the list orchestrator fetches through.

use super::wire::CoinListResponse;
use super::CoinPage;
use crate::error::FetchError;
use crate::http::{Pipeline, RequestDescriptor, Transport};
use async_trait::async_trait;
use std::sync::Arc;

/// Fetches one page of the coin list.
#[async_trait]
pub trait CoinListService: Send + Sync {
    async fn fetch_coin_list(&self, request: &RequestDescriptor) -> Result<CoinPage, FetchError>;
}

#[async_trait]
impl<T: Transport> CoinListService for Pipeline<T> {
    async fn fetch_coin_list(&self, request: &RequestDescriptor) -> Result<CoinPage, FetchError> {
        let resp: CoinListResponse = self.execute(request).await?;
        Ok(resp.into())
    }
}

#[async_trait]
impl<S: CoinListService + ?Sized> CoinListService for Arc<S> {
    async fn fetch_coin_list(&self, request: &RequestDescriptor) -> Result<CoinPage, FetchError> {
        (**self).fetch_coin_list(request).await
    }
}
