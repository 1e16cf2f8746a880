mod common;

use common::{OKX_BUY, OKX_SELL, mock_post};
use p2p_rate_scanner::{Okx, P2PTrait, RateQuery, RateScannerError};
use serde_json::json;

#[tokio::test]
async fn test_okx_get_rate() {
    let mut server = mockito::Server::new_async().await;
    let buy = mock_post(
        &mut server,
        "/market/books",
        json!({"side": "buy", "baseCurrency": "USDT", "quoteCurrency": "USD", "paymentMethod": "all"}),
        200,
        OKX_BUY,
    )
    .await;
    let sell = mock_post(&mut server, "/market/books", json!({"side": "sell"}), 200, OKX_SELL).await;

    let okx = Okx::with_client(reqwest::Client::new(), &server.url());
    let rate = okx.get_rate(&RateQuery::new("USD", "USDT")).await.expect("OKX rate");

    assert_eq!(rate.exchange, "OKX");
    assert_eq!(rate.buy_price, 1.01);
    assert_eq!(rate.sell_price, 0.99);
    assert_eq!(rate.available, 5000.0);
    assert_eq!(rate.limit, "10 - 5000 USD");
    assert_eq!(rate.payment_method, "bank");
    assert_eq!(rate.trade_url, "https://www.okx.com/p2p-markets/usdt-usd/buy");

    buy.assert_async().await;
    sell.assert_async().await;
}

#[tokio::test]
async fn test_okx_empty_side_has_no_quotes() {
    let mut server = mockito::Server::new_async().await;
    mock_post(&mut server, "/market/books", json!({"side": "buy"}), 200, r#"{"code": "0", "data": []}"#).await;
    mock_post(&mut server, "/market/books", json!({"side": "sell"}), 200, OKX_SELL).await;

    let okx = Okx::with_client(reqwest::Client::new(), &server.url());
    let result = okx.get_rate(&RateQuery::new("USD", "USDT")).await;

    match result {
        Err(RateScannerError::NoQuotes(msg)) => assert!(msg.contains("OKX: no buy ads for USDT/USD")),
        other => panic!("Expected NoQuotes, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_okx_invalid_json() {
    let mut server = mockito::Server::new_async().await;
    mock_post(&mut server, "/market/books", json!({}), 200, "<html>blocked</html>").await;

    let okx = Okx::with_client(reqwest::Client::new(), &server.url());
    let result = okx.get_rate(&RateQuery::new("USD", "USDT")).await;
    assert!(matches!(result, Err(RateScannerError::ParseError(_))));
}
