use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Some P2P endpoints reject requests without a browser user agent.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0";

pub fn create_http_client() -> reqwest::Client {
    create_http_client_with_timeout(DEFAULT_TIMEOUT)
}

pub fn create_http_client_with_timeout(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Client that sends a browser-like `User-Agent` on every request.
pub fn create_http_client_with_browser_headers(
    timeout: Duration,
) -> Result<reqwest::Client, crate::common::RateScannerError> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .default_headers({
            let mut headers = reqwest::header::HeaderMap::new();
            headers.insert(
                reqwest::header::USER_AGENT,
                reqwest::header::HeaderValue::from_static(BROWSER_USER_AGENT),
            );
            headers.insert(
                reqwest::header::CONTENT_TYPE,
                reqwest::header::HeaderValue::from_static("application/json"),
            );
            headers
        })
        .build()?;

    Ok(client)
}
