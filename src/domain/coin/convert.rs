//! Conversions from wire types to domain types for the coin list.

use super::wire::{CoinListResponse, CoinResponse};
use super::{Coin, CoinPage};

impl From<CoinResponse> for Coin {
    fn from(c: CoinResponse) -> Self {
        Self {
            id: c.uuid,
            symbol: c.symbol,
            name: c.name,
            icon_url: c.icon_url,
            price: c.price,
            change: c.change,
            rank: c.rank,
            color: c.color,
            market_cap: c.market_cap,
            volume_24h: c.volume_24h,
            btc_price: c.btc_price,
        }
    }
}

impl From<CoinListResponse> for CoinPage {
    fn from(resp: CoinListResponse) -> Self {
        Self {
            total: resp.data.stats.map(|s| s.total),
            coins: resp.data.coins.into_iter().map(Coin::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    const LIST_JSON: &str = r##"{
        "status": "success",
        "data": {
            "stats": {"total": 2, "totalMarketCap": "2500000000000", "total24hVolume": "90000000000"},
            "coins": [
                {
                    "uuid": "Qwsogvtv82FCd",
                    "symbol": "BTC",
                    "name": "Bitcoin",
                    "color": "#f7931A",
                    "iconUrl": "https://cdn.coinranking.com/bOabBYkcX/bitcoin_btc.svg",
                    "marketCap": "1300000000000",
                    "price": "65955.12",
                    "change": "-0.45",
                    "rank": 1,
                    "24hVolume": "31000000000",
                    "btcPrice": "1",
                    "sparkline": ["65000.1", null, "65955.12"]
                },
                {
                    "uuid": "razxDUgYGNAdQ",
                    "symbol": "ETH",
                    "name": "Ethereum",
                    "color": null,
                    "iconUrl": "https://cdn.coinranking.com/rk4RKHOuW/eth.svg",
                    "price": "3400.5",
                    "change": "1.20",
                    "rank": 2
                }
            ]
        }
    }"##;

    #[test]
    fn test_list_response_conversion() {
        let resp: CoinListResponse = serde_json::from_str(LIST_JSON).unwrap();
        let page = CoinPage::from(resp);

        assert_eq!(page.total, Some(2));
        assert_eq!(page.coins.len(), 2);

        let btc = &page.coins[0];
        assert_eq!(btc.id.as_str(), "Qwsogvtv82FCd");
        assert_eq!(btc.price, Decimal::from_str("65955.12").unwrap());
        assert!(btc.is_negative_change());
        assert_eq!(btc.color.as_deref(), Some("#f7931A"));
        assert_eq!(btc.volume_24h, Some(Decimal::from(31_000_000_000u64)));

        let eth = &page.coins[1];
        assert_eq!(eth.rank, 2);
        assert!(eth.color.is_none());
        assert!(eth.market_cap.is_none());
        assert!(!eth.is_negative_change());
        assert_eq!(eth.change_text(), "▲ 1.20 %");
    }
}
