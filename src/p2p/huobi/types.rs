use crate::common::LooseNumber;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct HuobiTradeMarketResponse {
    #[serde(default)]
    pub data: Option<Vec<HuobiAd>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HuobiAd {
    #[serde(default)]
    pub price: Option<LooseNumber>,
    #[serde(default)]
    pub trade_count: Option<LooseNumber>,
    #[serde(default)]
    pub stock: Option<LooseNumber>,
    #[serde(default)]
    pub min_trade_limit: Option<LooseNumber>,
    #[serde(default)]
    pub max_trade_limit: Option<LooseNumber>,
    #[serde(default)]
    pub pay_method: Option<Vec<serde_json::Value>>,
}
