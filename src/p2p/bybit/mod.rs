mod types;

use crate::common::{
    ExchangeTrait, P2PExchange, P2PRate, P2PTrait, RateQuery, RateScannerError, TradeSide,
    format_limit, join_payment_methods, number_or_zero, payment_label,
};
use crate::create_exchange;
use crate::p2p::no_quotes;
use async_trait::async_trait;
use tracing::debug;
use types::{BybitAd, BybitOnlineRequest, BybitOnlineResponse};

pub const BYBIT_API_BASE: &str = "https://api2.bybit.com/fiat/otc";

create_exchange!(Bybit, BYBIT_API_BASE);

#[async_trait]
impl ExchangeTrait for Bybit {
    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn client(&self) -> &reqwest::Client {
        &self.client
    }

    fn exchange_name(&self) -> &str {
        "Bybit"
    }
}

impl Bybit {
    async fn first_ad(&self, query: &RateQuery, side: TradeSide) -> Result<BybitAd, RateScannerError> {
        let body = BybitOnlineRequest {
            token_id: &query.crypto,
            currency_id: &query.fiat,
            side: match side {
                TradeSide::Buy => "1",
                TradeSide::Sell => "0",
            },
            size: "10",
            page: "1",
        };

        let response: BybitOnlineResponse = self.post("item/online", &body).await?;
        let items = response.result.and_then(|result| result.items);
        debug!(exchange = "Bybit", ?side, ads = items.as_ref().map(Vec::len), "online items");

        items
            .and_then(|ads| ads.into_iter().next())
            .ok_or_else(|| no_quotes("Bybit", side, query))
    }
}

#[async_trait]
impl P2PTrait for Bybit {
    fn exchange(&self) -> P2PExchange {
        P2PExchange::Bybit
    }

    fn trade_url(&self, query: &RateQuery) -> String {
        format!(
            "https://www.bybit.com/fiat/trade/otc?actionType=1&token={}&fiat={}&paymentMethod=",
            query.crypto, query.fiat
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
    best_buy: &BybitAd,
    best_sell: &BybitAd,
    fiat: &str,
    trade_url: String,
) -> P2PRate {
    P2PRate {
        exchange: exchange.display_name().to_string(),
        buy_price: number_or_zero(best_buy.price.as_ref()),
        sell_price: number_or_zero(best_sell.price.as_ref()),
        available: number_or_zero(best_buy.last_quantity.as_ref()),
        limit: format_limit(best_buy.min_amount.as_ref(), best_buy.max_amount.as_ref(), fiat),
        payment_method: join_payment_methods(
            best_buy.payments.iter().flatten().map(payment_label),
        ),
        trade_url,
    }
}
