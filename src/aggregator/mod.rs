use crate::common::{
    P2PExchange, P2PRate, P2PTrait, RateQuery, RateScannerError, ScannerConfig,
    create_http_client_with_browser_headers, create_http_client_with_timeout,
};
use crate::p2p::{
    BINANCE_API_BASE, BYBIT_API_BASE, Binance, Bybit, HUOBI_API_BASE, Huobi, KUCOIN_API_BASE,
    Kucoin, OKX_API_BASE, Okx,
};
use futures::future::join_all;
use tracing::{info, warn};

mod types;
pub use types::{ErrorResponse, RatesRequest, RatesResponse};

/// Rate aggregator - queries P2P order books on several exchanges and returns the best quotes
pub struct RateAggregator {
    binance: Binance,
    okx: Okx,
    bybit: Bybit,
    huobi: Huobi,
    kucoin: Kucoin,
}

impl Default for RateAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl RateAggregator {
    /// Aggregator against the public exchange endpoints.
    pub fn new() -> Self {
        Self {
            binance: Binance::new(),
            okx: Okx::new(),
            bybit: Bybit::new(),
            huobi: Huobi::new(),
            kucoin: Kucoin::new(),
        }
    }

    /// Aggregator using the configured timeout and API base overrides.
    pub fn from_config(config: &ScannerConfig) -> Self {
        let client = create_http_client_with_timeout(config.http_timeout);
        let browser_client = create_http_client_with_browser_headers(config.http_timeout)
            .unwrap_or_else(|_| client.clone());

        Self {
            binance: Binance::with_client(
                client.clone(),
                config.api_base(P2PExchange::Binance, BINANCE_API_BASE),
            ),
            okx: Okx::with_client(client.clone(), config.api_base(P2PExchange::Okx, OKX_API_BASE)),
            bybit: Bybit::with_client(client, config.api_base(P2PExchange::Bybit, BYBIT_API_BASE)),
            huobi: Huobi::with_client(
                browser_client.clone(),
                config.api_base(P2PExchange::Huobi, HUOBI_API_BASE),
            ),
            kucoin: Kucoin::with_client(
                browser_client,
                config.api_base(P2PExchange::Kucoin, KUCOIN_API_BASE),
            ),
        }
    }

    /// Fetches rates from every requested exchange in parallel
    ///
    /// # Arguments
    /// * `request` - Pair, exchange names and ad filters
    ///
    /// # Returns
    /// One rate per exchange that answered, in request order.
    /// Exchanges that fail or have an unknown name are left out.
    pub async fn fetch_rates(&self, request: &RatesRequest) -> Vec<P2PRate> {
        let query = request.query();
        info!(
            crypto = %query.crypto,
            fiat = %query.fiat,
            exchanges = ?request.exchanges,
            "fetching P2P rates"
        );

        let query = &query;
        let futures: Vec<_> = request
            .exchanges
            .iter()
            .map(|name| async move {
                let exchange = match name.parse::<P2PExchange>() {
                    Ok(exchange) => exchange,
                    Err(_) => {
                        warn!(exchange = %name, "unknown exchange, skipping");
                        return None;
                    }
                };

                match self.fetch_rate(exchange, query).await {
                    Ok(rate) => {
                        info!(%exchange, "returned data successfully");
                        Some(rate)
                    }
                    Err(e) => {
                        warn!(%exchange, error = %e, "no data available");
                        None
                    }
                }
            })
            .collect();

        join_all(futures).await.into_iter().flatten().collect()
    }

    /// Gets the rate from a single exchange
    pub async fn fetch_rate(
        &self,
        exchange: P2PExchange,
        query: &RateQuery,
    ) -> Result<P2PRate, RateScannerError> {
        match exchange {
            P2PExchange::Binance => self.binance.get_rate(query).await,
            P2PExchange::Okx => self.okx.get_rate(query).await,
            P2PExchange::Bybit => self.bybit.get_rate(query).await,
            P2PExchange::Huobi => self.huobi.get_rate(query).await,
            P2PExchange::Kucoin => self.kucoin.get_rate(query).await,
        }
    }
}
