//! `p2p-rate-scanner`
//!
//! Poll P2P order books on several exchanges and show the best buy/sell quote per exchange.
//!
//! ## Quickstart (single exchange)
//!
//! ```no_run
//! use p2p_rate_scanner::{Binance, P2PTrait, RateQuery};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), p2p_rate_scanner::RateScannerError> {
//! let rate = Binance::new().get_rate(&RateQuery::new("USD", "USDT")).await?;
//! println!("{} buy={} sell={}", rate.exchange, rate.buy_price, rate.sell_price);
//! # Ok(())
//! # }
//! ```
//!
//! ## Quickstart (all exchanges)
//!
//! ```no_run
//! use p2p_rate_scanner::{RateAggregator, RatesRequest};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let request = RatesRequest {
//!     fiat: "USD".into(),
//!     crypto: "USDT".into(),
//!     exchanges: vec!["Binance".into(), "OKX".into(), "KuCoin".into()],
//!     no_verification_required: false,
//!     only_tradable: true,
//!     min_amount: None,
//!     payment_methods: vec![],
//! };
//!
//! for rate in RateAggregator::new().fetch_rates(&request).await {
//!     println!("{}: buy={} sell={}", rate.exchange, rate.buy_price, rate.sell_price);
//! }
//! # }
//! ```

pub mod aggregator;
pub mod common;
pub mod display;
pub mod p2p;
pub mod server;
pub mod watch;

// Re-export common types
pub use p2p::{Binance, Bybit, Huobi, Kucoin, Okx};

pub use aggregator::{ErrorResponse, RateAggregator, RatesRequest, RatesResponse};
pub use common::{
    ExchangeTrait, P2PExchange, P2PRate, P2PTrait, RateFilters, RateQuery, RateScannerError,
    ScannerConfig, init_logging, load_dotenv,
};
pub use display::{best_buy, best_sell, render_rates_table};
pub use server::{AppState, router, start_server};
pub use watch::watch_rates;
