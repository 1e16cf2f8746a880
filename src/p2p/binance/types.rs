use crate::common::LooseNumber;
use serde::{Deserialize, Serialize};

/// Body of `POST adv/search`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BinanceSearchRequest<'a> {
    pub asset: &'a str,
    pub fiat: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_check: Option<bool>,
    pub page: u32,
    pub pay_types: Vec<String>,
    // Always sent as null
    pub publisher_type: Option<String>,
    pub rows: u32,
    pub trade_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trans_amount: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct BinanceSearchResponse {
    #[serde(default)]
    pub data: Option<Vec<BinanceAdItem>>,
}

#[derive(Debug, Deserialize)]
pub struct BinanceAdItem {
    #[serde(default)]
    pub adv: Option<BinanceAdv>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinanceAdv {
    #[serde(default)]
    pub price: Option<LooseNumber>,
    #[serde(default)]
    pub surplus_amount: Option<LooseNumber>,
    #[serde(default)]
    pub tradable_quantity: Option<LooseNumber>,
    #[serde(default)]
    pub min_single_trans_amount: Option<LooseNumber>,
    #[serde(default)]
    pub dynamic_max_single_trans_amount: Option<LooseNumber>,
    #[serde(default)]
    pub trade_methods: Option<Vec<BinanceTradeMethod>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinanceTradeMethod {
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub trade_method_name: Option<String>,
}
