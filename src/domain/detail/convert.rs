//! Conversions from detail wire types to domain types.

use super::wire::{CoinDetailResponse, CoinDetailWire};
use super::CoinDetail;

impl From<CoinDetailWire> for CoinDetail {
    fn from(c: CoinDetailWire) -> Self {
        Self {
            id: c.uuid,
            symbol: c.symbol,
            name: c.name,
            icon_url: c.icon_url,
            price: c.price,
            change: c.change,
            rank: c.rank,
            color: c.color,
            btc_price: c.btc_price,
            market_cap: c.market_cap,
            volume_24h: c.volume_24h,
            all_time_high: c.all_time_high,
            supply: c.supply,
            description: c.description.filter(|d| !d.is_empty()),
            website_url: c.website_url.filter(|u| !u.is_empty()),
            sparkline: c.sparkline,
        }
    }
}

impl From<CoinDetailResponse> for Option<CoinDetail> {
    fn from(resp: CoinDetailResponse) -> Self {
        resp.data.coin.map(CoinDetail::from)
    }
}
