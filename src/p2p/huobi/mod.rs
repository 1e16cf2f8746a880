mod types;

use crate::common::{
    ExchangeTrait, P2PExchange, P2PRate, P2PTrait, RateQuery, RateScannerError, TradeSide,
    first_present, format_limit, join_payment_methods, number_or_zero, payment_label,
};
use crate::create_exchange;
use crate::p2p::no_quotes;
use async_trait::async_trait;
use tracing::debug;
use types::{HuobiAd, HuobiTradeMarketResponse};

pub const HUOBI_API_BASE: &str = "https://otc-api.trygofast.com/v1/data";

create_exchange!(Huobi, HUOBI_API_BASE, browser_headers);

#[async_trait]
impl ExchangeTrait for Huobi {
    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn client(&self) -> &reqwest::Client {
        &self.client
    }

    fn exchange_name(&self) -> &str {
        "Huobi"
    }
}

impl Huobi {
    async fn first_ad(&self, query: &RateQuery, side: TradeSide) -> Result<HuobiAd, RateScannerError> {
        let params = trade_market_params(query, side);
        let response: HuobiTradeMarketResponse = self.get("trade-market", &params).await?;
        debug!(exchange = "Huobi", ?side, ads = response.data.as_ref().map(Vec::len), "trade-market response");

        response
            .data
            .and_then(|ads| ads.into_iter().next())
            .ok_or_else(|| no_quotes("Huobi", side, query))
    }
}

/// Query string of `GET trade-market`. Coin and currency go lowercase.
fn trade_market_params(query: &RateQuery, side: TradeSide) -> Vec<(&'static str, String)> {
    vec![
        ("coinId", query.crypto.to_lowercase()),
        ("currency", query.fiat.to_lowercase()),
        (
            "tradeType",
            match side {
                TradeSide::Buy => "buy",
                TradeSide::Sell => "sell",
            }
            .to_string(),
        ),
        ("currPage", "1".to_string()),
        ("payMethod", "0".to_string()),
        ("acceptOrder", "0".to_string()),
        ("country", String::new()),
        ("blockType", "general".to_string()),
        ("online", "1".to_string()),
        ("range", "0".to_string()),
        ("amount", String::new()),
    ]
}

#[async_trait]
impl P2PTrait for Huobi {
    fn exchange(&self) -> P2PExchange {
        P2PExchange::Huobi
    }

    fn trade_url(&self, query: &RateQuery) -> String {
        format!(
            "https://www.htx.com/en-us/fiat-crypto/trade/buy-{}",
            query.crypto.to_lowercase()
        )
    }

    async fn get_rate(&self, query: &RateQuery) -> Result<P2PRate, RateScannerError> {
        query.validate()?;

        let (best_buy, best_sell) = tokio::try_join!(
            self.first_ad(query, TradeSide::Buy),
            self.first_ad(query, TradeSide::Sell)
        )?;

        Ok(normalize(
            self.exchange(),
            &best_buy,
            &best_sell,
            &query.fiat,
            self.trade_url(query),
        ))
    }
}

fn normalize(
    exchange: P2PExchange,
    best_buy: &HuobiAd,
    best_sell: &HuobiAd,
    fiat: &str,
    trade_url: String,
) -> P2PRate {
    P2PRate {
        exchange: exchange.display_name().to_string(),
        buy_price: number_or_zero(best_buy.price.as_ref()),
        sell_price: number_or_zero(best_sell.price.as_ref()),
        available: first_present(&[best_buy.trade_count.as_ref(), best_buy.stock.as_ref()]),
        limit: format_limit(
            best_buy.min_trade_limit.as_ref(),
            best_buy.max_trade_limit.as_ref(),
            fiat,
        ),
        payment_method: join_payment_methods(
            best_buy.pay_method.iter().flatten().map(payment_label),
        ),
        trade_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_lowercase_the_pair() {
        let params = trade_market_params(&RateQuery::new("RUB", "USDT"), TradeSide::Sell);
        let lookup = |key: &str| {
            params
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.as_str())
        };
        assert_eq!(lookup("coinId"), Some("usdt"));
        assert_eq!(lookup("currency"), Some("rub"));
        assert_eq!(lookup("tradeType"), Some("sell"));
        assert_eq!(lookup("country"), Some(""));
        assert_eq!(lookup("blockType"), Some("general"));
    }

    #[test]
    fn available_falls_back_to_stock() {
        let response: HuobiTradeMarketResponse = serde_json::from_str(
            r#"{"code": 200, "data": [
                {"price": "92.4", "tradeCount": 0, "stock": "1300.25",
                 "minTradeLimit": "500", "maxTradeLimit": "100000", "payMethod": ["Sberbank"]}
            ]}"#,
        )
        .unwrap();
        let best_buy = response.data.unwrap().into_iter().next().unwrap();

        let rate = normalize(
            P2PExchange::Huobi,
            &best_buy,
            &HuobiAd::default(),
            "RUB",
            "url".into(),
        );
        assert_eq!(rate.exchange, "Huobi");
        assert_eq!(rate.buy_price, 92.4);
        assert_eq!(rate.sell_price, 0.0);
        assert_eq!(rate.available, 1300.25);
        assert_eq!(rate.limit, "500 - 100000 RUB");
        assert_eq!(rate.payment_method, "Sberbank");
    }

    #[test]
    fn trade_url_names_the_coin() {
        let url = Huobi::new().trade_url(&RateQuery::new("USD", "BTC"));
        assert_eq!(url, "https://www.htx.com/en-us/fiat-crypto/trade/buy-btc");
    }
}
