mod types;

use crate::common::{
    ExchangeTrait, P2PExchange, P2PRate, P2PTrait, RateQuery, RateScannerError, TradeSide,
    format_limit, join_payment_methods, number_or_zero, payment_label,
};
use crate::create_exchange;
use crate::p2p::no_quotes;
use async_trait::async_trait;
use tracing::debug;
use types::{OkxAd, OkxBooksRequest, OkxBooksResponse};

pub const OKX_API_BASE: &str = "https://www.okx.com/api/v5";

create_exchange!(Okx, OKX_API_BASE);

#[async_trait]
impl ExchangeTrait for Okx {
    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn client(&self) -> &reqwest::Client {
        &self.client
    }

    fn exchange_name(&self) -> &str {
        "OKX"
    }
}

impl Okx {
    async fn first_ad(&self, query: &RateQuery, side: TradeSide) -> Result<OkxAd, RateScannerError> {
        let body = OkxBooksRequest {
            side: match side {
                TradeSide::Buy => "buy",
                TradeSide::Sell => "sell",
            },
            base_currency: &query.crypto,
            quote_currency: &query.fiat,
            payment_method: "all",
        };

        let response: OkxBooksResponse = self.post("market/books", &body).await?;
        debug!(exchange = "OKX", ?side, ads = response.data.as_ref().map(Vec::len), "books response");

        response
            .data
            .and_then(|ads| ads.into_iter().next())
            .ok_or_else(|| no_quotes("OKX", side, query))
    }
}

#[async_trait]
impl P2PTrait for Okx {
    fn exchange(&self) -> P2PExchange {
        P2PExchange::Okx
    }

    fn trade_url(&self, query: &RateQuery) -> String {
        format!(
            "https://www.okx.com/p2p-markets/{}-{}/buy",
            query.crypto.to_lowercase(),
            query.fiat.to_lowercase()
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
    best_buy: &OkxAd,
    best_sell: &OkxAd,
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
            best_buy.payment_methods.iter().flatten().map(payment_label),
        ),
        trade_url,
    }
}
