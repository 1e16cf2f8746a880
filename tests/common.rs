use mockito::{Matcher, Mock, ServerGuard};
use p2p_rate_scanner::{P2PExchange, ScannerConfig};

// Allow dead code warnings since different test files use different items from this module

/// Config pointing every exchange at the mock server.
#[allow(dead_code)]
pub fn config_for(server: &ServerGuard) -> ScannerConfig {
    P2PExchange::ALL
        .iter()
        .fold(ScannerConfig::default(), |config, exchange| {
            config.with_api_base(*exchange, &server.url())
        })
}

/// `POST {path}` whose JSON body contains `partial`.
#[allow(dead_code)]
pub async fn mock_post(
    server: &mut ServerGuard,
    path: &str,
    partial: serde_json::Value,
    status: usize,
    body: &str,
) -> Mock {
    server
        .mock("POST", path)
        .match_body(Matcher::PartialJson(partial))
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

/// `GET {path}` whose query contains `key=value`.
#[allow(dead_code)]
pub async fn mock_get(
    server: &mut ServerGuard,
    path: &str,
    key: &str,
    value: &str,
    status: usize,
    body: &str,
) -> Mock {
    server
        .mock("GET", Matcher::Regex(format!("^{}", path)))
        .match_query(Matcher::UrlEncoded(key.to_string(), value.to_string()))
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

#[allow(dead_code)]
pub const BINANCE_BUY: &str = r#"{"code": "000000", "data": [
    {"adv": {"price": "1.002", "surplusAmount": "930.12", "tradableQuantity": "930.12",
             "minSingleTransAmount": "20.00", "dynamicMaxSingleTransAmount": "932.00",
             "tradeMethods": [{"identifier": "Zelle", "tradeMethodName": "Zelle"}]}}
]}"#;

#[allow(dead_code)]
pub const BINANCE_SELL: &str = r#"{"code": "000000", "data": [
    {"adv": {"price": "0.998", "surplusAmount": "120", "tradableQuantity": "120"}}
]}"#;

#[allow(dead_code)]
pub const OKX_BUY: &str = r#"{"code": "0", "data": [
    {"price": "1.01", "availableAmount": "5000", "minAmount": "10", "maxAmount": "5000",
     "paymentMethods": ["bank"]}
]}"#;

#[allow(dead_code)]
pub const OKX_SELL: &str = r#"{"code": "0", "data": [{"price": "0.99"}]}"#;

#[allow(dead_code)]
pub const BYBIT_BUY: &str = r#"{"ret_code": 0, "result": {"items": [
    {"price": "1.005", "lastQuantity": "777", "minAmount": "15", "maxAmount": "700",
     "payments": [{"name": "Wise"}]}
]}}"#;

#[allow(dead_code)]
pub const BYBIT_SELL: &str = r#"{"ret_code": 0, "result": {"items": [{"price": "0.995"}]}}"#;

#[allow(dead_code)]
pub const HUOBI_BUY: &str = r#"{"code": 200, "data": [
    {"price": "1.003", "tradeCount": "640.5", "minTradeLimit": "50", "maxTradeLimit": "640",
     "payMethod": ["Bank Transfer"]}
]}"#;

#[allow(dead_code)]
pub const HUOBI_SELL: &str = r#"{"code": 200, "data": [{"price": "0.997"}]}"#;

#[allow(dead_code)]
pub const KUCOIN_BUY: &str = r#"{"success": true, "items": [
    {"price": "1.004", "availableAmount": "300", "minAmount": "25", "maxAmount": "300",
     "payTypes": ["SEPA"]}
]}"#;

#[allow(dead_code)]
pub const KUCOIN_SELL: &str = r#"{"success": true, "items": [{"price": "0.996"}]}"#;

/// Mocks both sides of every exchange.
#[allow(dead_code)]
pub async fn mock_all_exchanges(server: &mut ServerGuard) -> Vec<Mock> {
    use serde_json::json;

    vec![
        mock_post(server, "/adv/search", json!({"tradeType": "BUY"}), 200, BINANCE_BUY).await,
        mock_post(server, "/adv/search", json!({"tradeType": "SELL"}), 200, BINANCE_SELL).await,
        mock_post(server, "/market/books", json!({"side": "buy"}), 200, OKX_BUY).await,
        mock_post(server, "/market/books", json!({"side": "sell"}), 200, OKX_SELL).await,
        mock_post(server, "/item/online", json!({"side": "1"}), 200, BYBIT_BUY).await,
        mock_post(server, "/item/online", json!({"side": "0"}), 200, BYBIT_SELL).await,
        mock_get(server, "/trade-market", "tradeType", "buy", 200, HUOBI_BUY).await,
        mock_get(server, "/trade-market", "tradeType", "sell", 200, HUOBI_SELL).await,
        mock_get(server, "/ad/list", "side", "buy", 200, KUCOIN_BUY).await,
        mock_get(server, "/ad/list", "side", "sell", 200, KUCOIN_SELL).await,
    ]
}
