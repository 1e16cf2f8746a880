mod common;

use common::{HUOBI_BUY, HUOBI_SELL};
use mockito::Matcher;
use p2p_rate_scanner::common::create_http_client_with_browser_headers;
use p2p_rate_scanner::{Huobi, P2PTrait, RateQuery, RateScannerError};
use std::time::Duration;

fn huobi_for(server: &mockito::ServerGuard) -> Huobi {
    let client = create_http_client_with_browser_headers(Duration::from_secs(5)).unwrap();
    Huobi::with_client(client, &server.url())
}

#[tokio::test]
async fn test_huobi_get_rate() {
    let mut server = mockito::Server::new_async().await;
    let buy = server
        .mock("GET", Matcher::Regex("^/trade-market".to_string()))
        .match_header("user-agent", "Mozilla/5.0")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("coinId".into(), "usdt".into()),
            Matcher::UrlEncoded("currency".into(), "usd".into()),
            Matcher::UrlEncoded("tradeType".into(), "buy".into()),
            Matcher::UrlEncoded("blockType".into(), "general".into()),
            Matcher::UrlEncoded("online".into(), "1".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(HUOBI_BUY)
        .create_async()
        .await;
    let sell = common::mock_get(&mut server, "/trade-market", "tradeType", "sell", 200, HUOBI_SELL).await;

    let rate = huobi_for(&server)
        .get_rate(&RateQuery::new("USD", "USDT"))
        .await
        .expect("Huobi rate");

    assert_eq!(rate.exchange, "Huobi");
    assert_eq!(rate.buy_price, 1.003);
    assert_eq!(rate.sell_price, 0.997);
    assert_eq!(rate.available, 640.5);
    assert_eq!(rate.limit, "50 - 640 USD");
    assert_eq!(rate.payment_method, "Bank Transfer");
    assert_eq!(rate.trade_url, "https://www.htx.com/en-us/fiat-crypto/trade/buy-usdt");

    buy.assert_async().await;
    sell.assert_async().await;
}

#[tokio::test]
async fn test_huobi_no_data() {
    let mut server = mockito::Server::new_async().await;
    common::mock_get(&mut server, "/trade-market", "tradeType", "buy", 200, r#"{"code": 200, "data": []}"#).await;
    common::mock_get(&mut server, "/trade-market", "tradeType", "sell", 200, r#"{"code": 200, "data": []}"#).await;

    let result = huobi_for(&server).get_rate(&RateQuery::new("USD", "USDT")).await;
    assert!(matches!(result, Err(RateScannerError::NoQuotes(_))));
}
