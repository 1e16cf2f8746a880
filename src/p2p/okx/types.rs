use crate::common::LooseNumber;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OkxBooksRequest<'a> {
    pub side: &'static str,
    pub base_currency: &'a str,
    pub quote_currency: &'a str,
    pub payment_method: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct OkxBooksResponse {
    #[serde(default)]
    pub data: Option<Vec<OkxAd>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OkxAd {
    #[serde(default)]
    pub price: Option<LooseNumber>,
    #[serde(default)]
    pub available_amount: Option<LooseNumber>,
    #[serde(default)]
    pub min_amount: Option<LooseNumber>,
    #[serde(default)]
    pub max_amount: Option<LooseNumber>,
    #[serde(default)]
    pub payment_methods: Option<Vec<serde_json::Value>>,
}
