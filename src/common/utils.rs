// src/common/utils.rs
use serde::Deserialize;
use std::fmt;

/// Payment label shown when an ad lists no payment methods.
pub const DEFAULT_PAYMENT_METHOD: &str = "Multiple";

/// Numeric field that P2P APIs send either as a JSON number or as a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl LooseNumber {
    /// Numeric value, or 0.0 when the field does not parse.
    pub fn as_f64(&self) -> f64 {
        match self {
            LooseNumber::Number(n) if n.is_finite() => *n,
            LooseNumber::Number(_) => 0.0,
            LooseNumber::Text(s) => parse_f64_or_zero(s),
            LooseNumber::Other(_) => 0.0,
        }
    }

    /// Whether the value counts as present in a fallback chain.
    /// Empty strings and zero numbers fall through to the next field.
    pub fn is_present(&self) -> bool {
        match self {
            LooseNumber::Number(n) => *n != 0.0 && !n.is_nan(),
            LooseNumber::Text(s) => !s.is_empty(),
            LooseNumber::Other(v) => !v.is_null(),
        }
    }
}

impl fmt::Display for LooseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LooseNumber::Number(n) => write!(f, "{}", n),
            LooseNumber::Text(s) => write!(f, "{}", s),
            LooseNumber::Other(v) => write!(f, "{}", v),
        }
    }
}

// Parse a string to a f64, falling back to zero
pub fn parse_f64_or_zero(value: &str) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

// Numeric value of an optional field, zero when missing
pub fn number_or_zero(value: Option<&LooseNumber>) -> f64 {
    value.map(LooseNumber::as_f64).unwrap_or(0.0)
}

/// Value of the first present field in `candidates`, or 0.0.
pub fn first_present(candidates: &[Option<&LooseNumber>]) -> f64 {
    candidates
        .iter()
        .flatten()
        .find(|v| v.is_present())
        .map(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Formats an ad's order limit as `"{min} - {max} {FIAT}"`.
pub fn format_limit(min: Option<&LooseNumber>, max: Option<&LooseNumber>, fiat: &str) -> String {
    let render = |v: Option<&LooseNumber>| v.map(|v| v.to_string()).unwrap_or_else(|| "0".into());
    format!("{} - {} {}", render(min), render(max), fiat)
}

/// Joins payment method labels with `", "`.
/// Falls back to [DEFAULT_PAYMENT_METHOD] when no label is left.
pub fn join_payment_methods<I>(methods: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let labels: Vec<String> = methods.into_iter().filter(|m| !m.is_empty()).collect();
    if labels.is_empty() {
        DEFAULT_PAYMENT_METHOD.to_string()
    } else {
        labels.join(", ")
    }
}

/// Label for a payment method entry of unknown shape (plain string or object).
pub fn payment_label(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Object(map) => ["name", "identifier", "tradeMethodName", "payMethodName"]
            .iter()
            .find_map(|key| map.get(*key).and_then(|v| v.as_str()))
            .map(str::to_string)
            .unwrap_or_default(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

// get timestamp in milliseconds
pub fn get_timestamp_millis() -> u64 {
    chrono::Utc::now()
        .timestamp_millis()
        .try_into()
        .unwrap_or(0)
}
