//! Transport collaborator: sends a realized request, returns the raw body.
//!
//! Connectivity, timeouts and non-2xx statuses are all the transport's concern and
//! surface as [`TransportError`]. Nothing here retries.

use crate::error::TransportError;
use crate::http::request::HttpMethod;
use async_trait::async_trait;
use std::sync::Arc;
use url::Url;

/// A descriptor resolved against a base URL, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Vec<(&'static str, String)>,
}

/// Sends requests and returns response bodies.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<Vec<u8>, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: HttpRequest) -> Result<Vec<u8>, TransportError> {
        (**self).send(request).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn send(&self, request: HttpRequest) -> Result<Vec<u8>, TransportError> {
        (**self).send(request).await
    }
}

#[cfg(feature = "http")]
pub use reqwest_transport::ReqwestTransport;

#[cfg(feature = "http")]
mod reqwest_transport {
    use super::*;
    use std::time::Duration;

    /// [`Transport`] backed by `reqwest`.
    #[derive(Debug, Clone)]
    pub struct ReqwestTransport {
        client: reqwest::Client,
    }

    impl ReqwestTransport {
        pub fn new(timeout: Duration) -> Result<Self, TransportError> {
            let mut builder = reqwest::Client::builder();
            #[cfg(not(target_arch = "wasm32"))]
            {
                builder = builder.timeout(timeout).pool_max_idle_per_host(10);
            }
            #[cfg(target_arch = "wasm32")]
            let _ = timeout;

            Ok(Self {
                client: builder.build()?,
            })
        }
    }

    #[async_trait]
    impl Transport for ReqwestTransport {
        async fn send(&self, request: HttpRequest) -> Result<Vec<u8>, TransportError> {
            let method = match request.method {
                HttpMethod::Get => reqwest::Method::GET,
            };
            let mut req = self.client.request(method, request.url);
            for (name, value) in &request.headers {
                req = req.header(*name, value);
            }

            let resp = req.send().await?;
            let status = resp.status();

            if status.is_success() {
                return Ok(resp.bytes().await?.to_vec());
            }

            let body = resp.text().await.unwrap_or_default();
            Err(TransportError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}
