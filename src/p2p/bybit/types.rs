use crate::common::LooseNumber;
use serde::{Deserialize, Serialize};

/// Body of `POST item/online`. Bybit expects every field as a string.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BybitOnlineRequest<'a> {
    pub token_id: &'a str,
    pub currency_id: &'a str,
    /// "1" = buy, "0" = sell
    pub side: &'static str,
    pub size: &'static str,
    pub page: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct BybitOnlineResponse {
    #[serde(default)]
    pub result: Option<BybitOnlineResult>,
}

#[derive(Debug, Deserialize)]
pub struct BybitOnlineResult {
    #[serde(default)]
    pub items: Option<Vec<BybitAd>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BybitAd {
    #[serde(default)]
    pub price: Option<LooseNumber>,
    #[serde(default)]
    pub last_quantity: Option<LooseNumber>,
    #[serde(default)]
    pub min_amount: Option<LooseNumber>,
    #[serde(default)]
    pub max_amount: Option<LooseNumber>,
    #[serde(default)]
    pub payments: Option<Vec<serde_json::Value>>,
}
