pub mod client;
pub mod config;
pub mod errors;
pub mod exchange;
pub mod logging;
pub mod rate;
pub mod utils;

// Re-export
pub use client::{
    create_http_client, create_http_client_with_browser_headers, create_http_client_with_timeout,
};
pub use config::{ScannerConfig, load_dotenv};
pub use errors::RateScannerError;
pub use exchange::{ExchangeTrait, P2PExchange, P2PTrait};
pub use logging::init_logging;
pub use rate::{P2PRate, RateFilters, RateQuery, TradeSide};
pub use utils::{
    LooseNumber, first_present, format_limit, get_timestamp_millis, join_payment_methods,
    number_or_zero, parse_f64_or_zero, payment_label,
};
