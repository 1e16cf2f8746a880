use crate::common::{P2PRate, RateFilters, RateQuery};
use serde::{Deserialize, Deserializer, Serialize};

/// Body of a rates request, as sent by the rates UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatesRequest {
    pub fiat: String,
    pub crypto: String,
    /// Exchange display names, e.g. "Binance". Unknown names are skipped.
    pub exchanges: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub no_verification_required: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub only_tradable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_amount: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub payment_methods: Vec<String>,
}

// The rates UI sends `null` for filters the user left unset.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl RatesRequest {
    pub fn query(&self) -> RateQuery {
        RateQuery::new(&self.fiat, &self.crypto).with_filters(RateFilters {
            no_verification_required: self.no_verification_required,
            only_tradable: self.only_tradable,
            min_amount: self.min_amount,
            payment_methods: self.payment_methods.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatesResponse {
    pub rates: Vec<P2PRate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
