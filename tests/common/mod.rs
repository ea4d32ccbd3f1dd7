//! Shared test doubles and fixtures for the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use coinranking_sdk::prelude::*;
use coinranking_sdk::http::HttpRequest;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

pub const BASE_URL: &str = "https://api.test/v2";

pub const COINS_JSON: &str = include_str!("../fixtures/coins.json");
pub const COIN_DETAIL_JSON: &str = include_str!("../fixtures/coin_detail.json");
pub const PRICE_HISTORY_JSON: &str = include_str!("../fixtures/price_history.json");

#[derive(Debug, Clone)]
pub enum Reply {
    Body(String),
    Status(u16),
}

/// Transport double that answers by URL path (relative to [`BASE_URL`]).
///
/// Each path has a queue of replies; the last reply in a queue repeats. One
/// call can be held with [`MockTransport::hold_next`] until
/// [`MockTransport::release`] is called.
#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<String, VecDeque<Reply>>>,
    requests: Mutex<Vec<HttpRequest>>,
    calls: AtomicUsize,
    hold: AtomicBool,
    gate: Notify,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn on(&self, path: &str, reply: Reply) -> &Self {
        self.routes
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .push_back(reply);
        self
    }

    pub fn on_json(&self, path: &str, body: &str) -> &Self {
        self.on(path, Reply::Body(body.to_string()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests().pop().expect("no request sent")
    }

    pub fn hold_next(&self) {
        self.hold.store(true, Ordering::SeqCst);
    }

    pub fn release(&self) {
        self.gate.notify_one();
    }

    fn next_reply(&self, path: &str) -> Option<Reply> {
        let mut routes = self.routes.lock().unwrap();
        let queue = routes.get_mut(path)?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<Vec<u8>, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let path = request
            .url
            .path()
            .strip_prefix("/v2")
            .unwrap_or(request.url.path())
            .to_string();
        self.requests.lock().unwrap().push(request);

        if self.hold.swap(false, Ordering::SeqCst) {
            self.gate.notified().await;
        }

        match self.next_reply(&path) {
            Some(Reply::Body(body)) => Ok(body.into_bytes()),
            Some(Reply::Status(status)) => Err(TransportError::Status {
                status,
                body: String::new(),
            }),
            None => Err(TransportError::Status {
                status: 404,
                body: format!("no route for {path}"),
            }),
        }
    }
}

pub fn client(transport: &Arc<MockTransport>) -> CoinRankingClient<Arc<MockTransport>> {
    CoinRankingClientBuilder::new()
        .base_url(BASE_URL)
        .api_key("test-key")
        .build_with_transport(transport.clone())
        .unwrap()
}

pub fn coin(id: &str, name: &str) -> Coin {
    Coin {
        id: CoinId::from(id),
        symbol: name.chars().take(3).collect::<String>().to_uppercase(),
        name: name.to_string(),
        icon_url: format!("https://cdn.coinranking.com/{id}.svg"),
        price: rust_decimal::Decimal::ONE,
        change: rust_decimal::Decimal::ZERO,
        rank: 1,
        color: None,
        market_cap: None,
        volume_24h: None,
        btc_price: None,
    }
}
