//! Transport-agnostic request descriptors and the builders that produce them.
//!
//! Builders are pure and total: they never fail. Whether a descriptor can be
//! turned into a real URL is decided later by the pipeline.

use crate::domain::coin::{FilterState, PageCursor};
use crate::shared::{CoinId, TimePeriod};
use std::collections::BTreeMap;

/// HTTP method of a descriptor. Every endpoint the SDK calls is read-only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    #[default]
    Get,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
        }
    }
}

/// Abstract outbound request: path, method and query parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub path: String,
    pub method: HttpMethod,
    /// Ordered so realized URLs are deterministic.
    pub query: BTreeMap<String, String>,
}

impl RequestDescriptor {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: HttpMethod::Get,
            query: BTreeMap::new(),
        }
    }

    pub fn with_query(mut self, name: &str, value: impl Into<String>) -> Self {
        self.query.insert(name.to_string(), value.into());
        self
    }

    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }
}

/// `GET /coins` for the page the cursor points at.
///
/// `orderBy` / `orderDirection` are omitted when the filter leaves them unset,
/// so the server defaults apply.
pub fn build_list_request(
    cursor: PageCursor,
    page_size: u32,
    time_period: TimePeriod,
    filter: &FilterState,
) -> RequestDescriptor {
    let mut request = RequestDescriptor::get("/coins")
        .with_query("offset", cursor.offset(page_size).to_string())
        .with_query("limit", page_size.to_string())
        .with_query("timePeriod", time_period.as_str());

    if let Some(key) = filter.sort_key {
        request = request.with_query("orderBy", key.as_str());
    }
    if let Some(direction) = filter.direction {
        request = request.with_query("orderDirection", direction.as_str());
    }
    request
}

/// `GET /coin/{id}`.
pub fn build_detail_request(id: &CoinId, time_period: TimePeriod) -> RequestDescriptor {
    RequestDescriptor::get(format!("/coin/{}", urlencoding::encode(id.as_str())))
        .with_query("timePeriod", time_period.as_str())
}

/// `GET /coin/{id}/history`.
pub fn build_history_request(id: &CoinId, time_period: TimePeriod) -> RequestDescriptor {
    RequestDescriptor::get(format!(
        "/coin/{}/history",
        urlencoding::encode(id.as_str())
    ))
    .with_query("timePeriod", time_period.as_str())
}
