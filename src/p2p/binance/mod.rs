mod types;
use crate::common::{
    ExchangeTrait, P2PExchange, P2PRate, P2PTrait, RateFilters, RateQuery, RateScannerError,
    TradeSide, first_present, format_limit, join_payment_methods, number_or_zero,
};
use crate::create_exchange;
use crate::p2p::no_quotes;
use async_trait::async_trait;
use tracing::debug;
use types::{BinanceAdItem, BinanceAdv, BinanceSearchRequest, BinanceSearchResponse};

pub const BINANCE_API_BASE: &str = "https://p2p.binance.com/bapi/c2c/v2/friendly/c2c";
const BINANCE_ROWS: u32 = 10;

create_exchange!(Binance, BINANCE_API_BASE);

#[async_trait]
impl ExchangeTrait for Binance {
    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn client(&self) -> &reqwest::Client {
        &self.client
    }

    fn exchange_name(&self) -> &str {
        "Binance"
    }
}

impl Binance {
    async fn search(
        &self,
        query: &RateQuery,
        side: TradeSide,
    ) -> Result<Vec<BinanceAdItem>, RateScannerError> {
        let body = search_request(query, side);
        let response: BinanceSearchResponse = self.post("adv/search", &body).await?;
        debug!(exchange = "Binance", ?side, ads = response.data.as_ref().map(Vec::len), "search response");

        response.data.ok_or_else(|| no_quotes("Binance", side, query))
    }
}

#[async_trait]
impl P2PTrait for Binance {
    fn exchange(&self) -> P2PExchange {
        P2PExchange::Binance
    }

    fn trade_url(&self, query: &RateQuery) -> String {
        format!(
            "https://p2p.binance.com/en/trade/all-payments/{}?fiat={}",
            query.crypto, query.fiat
        )
    }

    async fn get_rate(&self, query: &RateQuery) -> Result<P2PRate, RateScannerError> {
        query.validate()?;

        let (buy_ads, sell_ads) = tokio::try_join!(
            self.search(query, TradeSide::Buy),
            self.search(query, TradeSide::Sell)
        )?;

        let best_buy = best_ad(buy_ads, &query.filters)
            .ok_or_else(|| no_quotes("Binance", TradeSide::Buy, query))?;
        let best_sell = best_ad(sell_ads, &query.filters)
            .ok_or_else(|| no_quotes("Binance", TradeSide::Sell, query))?;

        Ok(normalize(
            self.exchange(),
            &best_buy,
            &best_sell,
            &query.fiat,
            self.trade_url(query),
        ))
    }
}

/// Search body for one side. Filters map onto Binance's own search fields.
fn search_request<'a>(query: &'a RateQuery, side: TradeSide) -> BinanceSearchRequest<'a> {
    let filters = &query.filters;
    BinanceSearchRequest {
        asset: &query.crypto,
        fiat: &query.fiat,
        merchant_check: filters.no_verification_required.then_some(false),
        page: 1,
        pay_types: filters
            .payment_methods
            .iter()
            .map(|m| m.to_uppercase().replace(' ', "_"))
            .collect(),
        publisher_type: None,
        rows: BINANCE_ROWS,
        trade_type: match side {
            TradeSide::Buy => "BUY",
            TradeSide::Sell => "SELL",
        },
        trans_amount: filters.min_amount.filter(|amount| *amount != 0.0),
    }
}

/// First ad of the page, skipping sold-out ads when `only_tradable` is set.
fn best_ad(ads: Vec<BinanceAdItem>, filters: &RateFilters) -> Option<BinanceAdv> {
    if filters.only_tradable {
        ads.into_iter()
            .filter_map(|item| item.adv)
            .find(|adv| number_or_zero(adv.tradable_quantity.as_ref()) > 0.0)
    } else {
        ads.into_iter().next().and_then(|item| item.adv)
    }
}

fn normalize(
    exchange: P2PExchange,
    best_buy: &BinanceAdv,
    best_sell: &BinanceAdv,
    fiat: &str,
    trade_url: String,
) -> P2PRate {
    let payment_method = join_payment_methods(
        best_buy
            .trade_methods
            .iter()
            .flatten()
            .map(|m| {
                m.identifier
                    .clone()
                    .filter(|id| !id.is_empty())
                    .or_else(|| m.trade_method_name.clone())
                    .unwrap_or_default()
            }),
    );

    P2PRate {
        exchange: exchange.display_name().to_string(),
        buy_price: number_or_zero(best_buy.price.as_ref()),
        sell_price: number_or_zero(best_sell.price.as_ref()),
        available: first_present(&[
            best_buy.surplus_amount.as_ref(),
            best_buy.tradable_quantity.as_ref(),
        ]),
        limit: format_limit(
            best_buy.min_single_trans_amount.as_ref(),
            best_buy.dynamic_max_single_trans_amount.as_ref(),
            fiat,
        ),
        payment_method,
        trade_url,
    }
}
