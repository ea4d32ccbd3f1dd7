//! Fetch-and-decode pipeline.
//!
//! `descriptor → realize → transport → decode`. Each stage has its own error kind
//! ([`RequestError`], [`TransportError`], [`DecodingError`]) and a response either
//! decodes in full or the whole call fails.

use crate::error::{DecodingError, FetchError, RequestError};
use crate::http::request::RequestDescriptor;
use crate::http::transport::{HttpRequest, Transport};
use crate::network::API_KEY_HEADER;

use serde::de::DeserializeOwned;
use url::Url;

/// Realizes descriptors against a base URL and runs them through a [`Transport`].
pub struct Pipeline<T> {
    base_url: String,
    /// Sent as a header; never logged.
    api_key: Option<String>,
    transport: T,
}

impl<T: Transport> Pipeline<T> {
    pub fn new(base_url: &str, transport: T) -> Result<Self, RequestError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|source| RequestError::InvalidBaseUrl {
            url: base_url.clone(),
            source,
        })?;

        Ok(Self {
            base_url,
            api_key: None,
            transport,
        })
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|k| !k.is_empty());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Turn a descriptor into a concrete request.
    pub fn realize(&self, descriptor: &RequestDescriptor) -> Result<HttpRequest, RequestError> {
        validate_path(&descriptor.path)?;

        let mut url = Url::parse(&format!("{}{}", self.base_url, descriptor.path))?;
        if !descriptor.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &descriptor.query {
                pairs.append_pair(name, value);
            }
        }

        let mut headers = Vec::new();
        if let Some(key) = &self.api_key {
            headers.push((API_KEY_HEADER, key.clone()));
        }

        Ok(HttpRequest {
            method: descriptor.method,
            url,
            headers,
        })
    }

    /// Run one descriptor end to end and decode the body as `R`.
    pub async fn execute<R: DeserializeOwned>(
        &self,
        descriptor: &RequestDescriptor,
    ) -> Result<R, FetchError> {
        let request = self.realize(descriptor)?;
        tracing::debug!(
            method = request.method.as_str(),
            path = %descriptor.path,
            "Sending request to {}",
            request.url.path()
        );

        let body = self.transport.send(request).await?;
        Ok(decode(&body)?)
    }
}

/// Decode a response body against the schema `R`.
pub fn decode<R: DeserializeOwned>(body: &[u8]) -> Result<R, DecodingError> {
    Ok(serde_json::from_slice(body)?)
}

fn validate_path(path: &str) -> Result<(), RequestError> {
    let malformed = !path.starts_with('/')
        || path.contains("..")
        || path.contains(['?', '#'])
        || path.chars().any(char::is_whitespace);

    if malformed {
        return Err(RequestError::InvalidPath(path.to_string()));
    }
    Ok(())
}
