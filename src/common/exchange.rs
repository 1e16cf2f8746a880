use crate::common::{P2PRate, RateQuery, RateScannerError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Common exchange enum definition

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum P2PExchange {
    Binance,
    #[serde(rename = "OKX")]
    Okx,
    Bybit,
    Huobi,
    #[serde(rename = "KuCoin")]
    Kucoin,
}

impl P2PExchange {
    pub const ALL: [P2PExchange; 5] = [
        P2PExchange::Binance,
        P2PExchange::Okx,
        P2PExchange::Bybit,
        P2PExchange::Huobi,
        P2PExchange::Kucoin,
    ];

    /// Name used in requests, responses and the rates table.
    pub fn display_name(&self) -> &'static str {
        match self {
            P2PExchange::Binance => "Binance",
            P2PExchange::Okx => "OKX",
            P2PExchange::Bybit => "Bybit",
            P2PExchange::Huobi => "Huobi",
            P2PExchange::Kucoin => "KuCoin",
        }
    }
}

impl fmt::Display for P2PExchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for P2PExchange {
    type Err = RateScannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binance" => Ok(P2PExchange::Binance),
            "okx" => Ok(P2PExchange::Okx),
            "bybit" => Ok(P2PExchange::Bybit),
            "huobi" | "htx" => Ok(P2PExchange::Huobi),
            "kucoin" => Ok(P2PExchange::Kucoin),
            _ => Err(RateScannerError::UnknownExchange(s.to_string())),
        }
    }
}

// Common exchange trait definition
#[async_trait]
pub trait ExchangeTrait: Send + Sync {
    // Exchange specific methods
    fn api_base(&self) -> &str;
    fn client(&self) -> &reqwest::Client;
    fn exchange_name(&self) -> &str;

    // Default implementations
    async fn get<T: for<'de> Deserialize<'de>, Q: Serialize + Sync>(
        &self,
        endpoint: &str,
        query: &Q,
    ) -> Result<T, RateScannerError> {
        let url = format!("{}/{}", self.api_base(), endpoint);
        let response = self.client().get(&url).query(query).send().await?;
        self.decode(response).await
    }

    async fn post<T: for<'de> Deserialize<'de>, B: Serialize + Sync>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, RateScannerError> {
        let url = format!("{}/{}", self.api_base(), endpoint);
        let response = self.client().post(&url).json(body).send().await?;
        self.decode(response).await
    }

    async fn decode<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, RateScannerError> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(RateScannerError::ApiError(format!(
                "{} API error: {} - {}",
                self.exchange_name(),
                status,
                error_text
            )));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

// Common P2P trait
#[async_trait]
pub trait P2PTrait: ExchangeTrait {
    fn exchange(&self) -> P2PExchange;

    /// Link to the exchange's P2P trading page for the queried pair.
    fn trade_url(&self, query: &RateQuery) -> String;

    /// Best buy and best sell ad for the pair, normalized into a [P2PRate].
    /// Fails with [RateScannerError::NoQuotes] when either side has no ads.
    async fn get_rate(&self, query: &RateQuery) -> Result<P2PRate, RateScannerError>;
}

// P2P MACRO EXPORTS
#[macro_export]
macro_rules! create_exchange {
    (
        $struct_name:ident, $api_base:expr
    ) => {
        $crate::create_exchange!(@define $struct_name, $api_base, $crate::common::create_http_client());
    };
    (
        $struct_name:ident, $api_base:expr, browser_headers
    ) => {
        $crate::create_exchange!(
            @define $struct_name,
            $api_base,
            $crate::common::create_http_client_with_browser_headers(
                $crate::common::client::DEFAULT_TIMEOUT
            )
            .unwrap_or_else(|_| $crate::common::create_http_client())
        );
    };
    (
        @define $struct_name:ident, $api_base:expr, $client:expr
    ) => {
        pub struct $struct_name {
            client: reqwest::Client,
            api_base: String,
        }

        impl $struct_name {
            pub fn new() -> Self {
                Self::with_client($client, $api_base)
            }

            /// Uses `client` and sends requests under `api_base` instead of the public endpoint.
            pub fn with_client(client: reqwest::Client, api_base: &str) -> Self {
                Self {
                    client,
                    api_base: api_base.trim_end_matches('/').to_string(),
                }
            }
        }

        impl Default for $struct_name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_display_names_case_insensitively() {
        assert_eq!("binance".parse::<P2PExchange>().unwrap(), P2PExchange::Binance);
        assert_eq!("OKX".parse::<P2PExchange>().unwrap(), P2PExchange::Okx);
        assert_eq!(" KuCoin ".parse::<P2PExchange>().unwrap(), P2PExchange::Kucoin);
        assert_eq!("HTX".parse::<P2PExchange>().unwrap(), P2PExchange::Huobi);
        assert!(matches!(
            "Kraken".parse::<P2PExchange>(),
            Err(RateScannerError::UnknownExchange(name)) if name == "Kraken"
        ));
    }

    #[test]
    fn display_name_round_trips_through_serde() {
        for exchange in P2PExchange::ALL {
            let json = serde_json::to_string(&exchange).unwrap();
            assert_eq!(json, format!("\"{}\"", exchange.display_name()));
            assert_eq!(exchange.to_string().parse::<P2PExchange>().unwrap(), exchange);
        }
    }
}
