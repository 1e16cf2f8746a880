use crate::common::LooseNumber;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct KucoinAdListResponse {
    #[serde(default)]
    pub items: Option<Vec<KucoinAd>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KucoinAd {
    #[serde(default)]
    pub price: Option<LooseNumber>,
    #[serde(default)]
    pub available_amount: Option<LooseNumber>,
    #[serde(default)]
    pub min_amount: Option<LooseNumber>,
    #[serde(default)]
    pub max_amount: Option<LooseNumber>,
    #[serde(default)]
    pub pay_types: Option<Vec<serde_json::Value>>,
}
