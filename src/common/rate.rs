use crate::common::RateScannerError;
use serde::{Deserialize, Serialize};

/// Best-of-book P2P quote for one exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct P2PRate {
    pub exchange: String,
    /// Price of the first ad on the buy side
    pub buy_price: f64,
    /// Price of the first ad on the sell side
    pub sell_price: f64,
    /// Quantity left on the best buy ad
    pub available: f64,
    /// `"{min} - {max} {FIAT}"` of the best buy ad
    pub limit: String,
    pub payment_method: String,
    pub trade_url: String,
}

/// Ad filters. Only Binance forwards them to its API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateFilters {
    #[serde(default)]
    pub no_verification_required: bool,
    #[serde(default)]
    pub only_tradable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_amount: Option<f64>,
    #[serde(default)]
    pub payment_methods: Vec<String>,
}

/// Query sent to a single exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct RateQuery {
    /// Fiat currency code, e.g. "USD"
    pub fiat: String,
    /// Crypto asset code, e.g. "USDT"
    pub crypto: String,
    pub filters: RateFilters,
}

impl RateQuery {
    pub fn new(fiat: &str, crypto: &str) -> Self {
        Self {
            fiat: fiat.to_string(),
            crypto: crypto.to_string(),
            filters: RateFilters::default(),
        }
    }

    pub fn with_filters(mut self, filters: RateFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Rejects queries with a blank fiat or crypto code.
    pub fn validate(&self) -> Result<(), RateScannerError> {
        if self.fiat.trim().is_empty() || self.crypto.trim().is_empty() {
            return Err(RateScannerError::InvalidPair(format!(
                "fiat and crypto cannot be empty (got '{}/{}')",
                self.crypto, self.fiat
            )));
        }
        Ok(())
    }
}

/// Order book side, from the taker's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeSide {
    Buy,
    Sell,
}
