#[derive(thiserror::Error, Debug)]
pub enum RateScannerError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid pair: {0}")]
    InvalidPair(String),

    #[error("No quotes: {0}")]
    NoQuotes(String),

    #[error("Unknown exchange: {0}")]
    UnknownExchange(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
