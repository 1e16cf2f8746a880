mod types;
use crate::common::{
    ExchangeTrait, P2PExchange, P2PRate, P2PTrait, RateQuery, RateScannerError, TradeSide,
    format_limit, join_payment_methods, number_or_zero, payment_label,
};
use crate::create_exchange;
use crate::p2p::no_quotes;
use async_trait::async_trait;
use tracing::debug;
use types::{KucoinAd, KucoinAdListResponse};

pub const KUCOIN_API_BASE: &str = "https://www.kucoin.com/_api/otc";

create_exchange!(Kucoin, KUCOIN_API_BASE, browser_headers);

#[async_trait]
impl ExchangeTrait for Kucoin {
    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn client(&self) -> &reqwest::Client {
        &self.client
    }

    fn exchange_name(&self) -> &str {
        "KuCoin"
    }
}

impl Kucoin {
    async fn first_ad(&self, query: &RateQuery, side: TradeSide) -> Result<KucoinAd, RateScannerError> {
        let side_param = match side {
            TradeSide::Buy => "buy",
            TradeSide::Sell => "sell",
        };
        let params = [
            ("currency", query.crypto.as_str()),
            ("legal", query.fiat.as_str()),
            ("side", side_param),
            ("page", "1"),
            ("pageSize", "10"),
        ];

        let response: KucoinAdListResponse = self.get("ad/list", &params).await?;
        debug!(exchange = "KuCoin", ?side, ads = response.items.as_ref().map(Vec::len), "ad list response");

        response
            .items
            .and_then(|ads| ads.into_iter().next())
            .ok_or_else(|| no_quotes("KuCoin", side, query))
    }
}

#[async_trait]
impl P2PTrait for Kucoin {
    fn exchange(&self) -> P2PExchange {
        P2PExchange::Kucoin
    }

    fn trade_url(&self, query: &RateQuery) -> String {
        format!("https://www.kucoin.com/fiat/{}/{}", query.crypto, query.fiat)
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
    best_buy: &KucoinAd,
    best_sell: &KucoinAd,
    fiat: &str,
    trade_url: String,
) -> P2PRate {
    P2PRate {
        exchange: exchange.display_name().to_string(),
        buy_price: number_or_zero(best_buy.price.as_ref()),
        sell_price: number_or_zero(best_sell.price.as_ref()),
        available: number_or_zero(best_buy.available_amount.as_ref()),
        limit: format_limit(best_buy.min_amount.as_ref(), best_buy.max_amount.as_ref(), fiat),
        payment_method: join_payment_methods(
            best_buy.pay_types.iter().flatten().map(payment_label),
        ),
        trade_url,
    }
}
