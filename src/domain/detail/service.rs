//! Coin detail service.

use super::wire::CoinDetailResponse;
use super::CoinDetail;
use crate::error::FetchError;
use crate::http::{Pipeline, RequestDescriptor, Transport};
use async_trait::async_trait;
use std::sync::Arc;

/// Fetches a single coin. `Ok(None)` is a well-formed response with no matching coin.
#[async_trait]
pub trait CoinDetailService: Send + Sync {
    async fn fetch_coin_detail(
        &self,
        request: &RequestDescriptor,
    ) -> Result<Option<CoinDetail>, FetchError>;
}

#[async_trait]
impl<T: Transport> CoinDetailService for Pipeline<T> {
    async fn fetch_coin_detail(
        &self,
        request: &RequestDescriptor,
    ) -> Result<Option<CoinDetail>, FetchError> {
        let resp: CoinDetailResponse = self.execute(request).await?;
        Ok(resp.into())
    }
}

#[async_trait]
impl<S: CoinDetailService + ?Sized> CoinDetailService for Arc<S> {
    async fn fetch_coin_detail(
        &self,
        request: &RequestDescriptor,
    ) -> Result<Option<CoinDetail>, FetchError> {
        (**self).fetch_coin_detail(request).await
    }
}
