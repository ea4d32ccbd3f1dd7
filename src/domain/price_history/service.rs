//! Price history service.

use super::convert::history_points;
use super::wire::PriceHistoryResponse;
use super::PriceHistoryPoint;
use crate::error::FetchError;
use crate::http::{Pipeline, RequestDescriptor, Transport};
use async_trait::async_trait;
use std::sync::Arc;

/// Fetches a coin's price history, oldest point first.
#[async_trait]
pub trait PriceHistoryService: Send + Sync {
    async fn fetch_price_history(
        &self,
        request: &RequestDescriptor,
    ) -> Result<Vec<PriceHistoryPoint>, FetchError>;
}

#[async_trait]
impl<T: Transport> PriceHistoryService for Pipeline<T> {
    async fn fetch_price_history(
        &self,
        request: &RequestDescriptor,
    ) -> Result<Vec<PriceHistoryPoint>, FetchError> {
        let resp: PriceHistoryResponse = self.execute(request).await?;
        Ok(history_points(resp)?)
    }
}

#[async_trait]
impl<S: PriceHistoryService + ?Sized> PriceHistoryService for Arc<S> {
    async fn fetch_price_history(
        &self,
        request: &RequestDescriptor,
    ) -> Result<Vec<PriceHistoryPoint>, FetchError> {
        (**self).fetch_price_history(request).await
    }
}
