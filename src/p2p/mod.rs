pub mod binance;
pub mod bybit;
pub mod huobi;
pub mod kucoin;
pub mod okx;

use crate::common::{RateQuery, RateScannerError, TradeSide};

// Re-export
pub use binance::{BINANCE_API_BASE, Binance};
pub use bybit::{BYBIT_API_BASE, Bybit};
pub use huobi::{HUOBI_API_BASE, Huobi};
pub use kucoin::{KUCOIN_API_BASE, Kucoin};
pub use okx::{OKX_API_BASE, Okx};

/// Error for a side of the book that came back without ads.
pub(crate) fn no_quotes(exchange: &str, side: TradeSide, query: &RateQuery) -> RateScannerError {
    RateScannerError::NoQuotes(format!(
        "{}: no {} ads for {}/{}",
        exchange,
        match side {
            TradeSide::Buy => "buy",
            TradeSide::Sell => "sell",
        },
        query.crypto,
        query.fiat
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{P2PExchange, P2PTrait};

    #[test]
    fn clients_report_their_exchange() {
        assert_eq!(Binance::new().exchange(), P2PExchange::Binance);
        assert_eq!(Okx::new().exchange(), P2PExchange::Okx);
        assert_eq!(Bybit::new().exchange(), P2PExchange::Bybit);
        assert_eq!(Huobi::new().exchange(), P2PExchange::Huobi);
        assert_eq!(Kucoin::new().exchange(), P2PExchange::Kucoin);
    }
}
