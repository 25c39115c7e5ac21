//! Normalization of raw, untrusted quote records

use rust_decimal::prelude::*;
use serde_json::Value;
use crate::types::{Opportunity, RawQuoteRecord, UNKNOWN_EXCHANGE, UNKNOWN_TOKEN};

/// Turn the raw feed into normalized opportunities, preserving order.
///
/// Total: a non-array payload yields an empty list and a malformed record only loses the
/// fields that were malformed.
pub fn normalize(raw: &Value) -> Vec<Opportunity> {
    match raw.as_array() {
        Some(records) => normalize_records(records),
        None => Vec::new(),
    }
}

pub fn normalize_records(records: &[RawQuoteRecord]) -> Vec<Opportunity> {
    records.iter().map(normalize_record).collect()
}

pub fn normalize_record(record: &RawQuoteRecord) -> Opportunity {
    // `get` is None for anything that is not an object, so every field defaults
    Opportunity {
        token: coerce_text(record.get("token"), UNKNOWN_TOKEN),
        buy_exchange: coerce_text(record.get("buy_exchange"), UNKNOWN_EXCHANGE),
        sell_exchange: coerce_text(record.get("sell_exchange"), UNKNOWN_EXCHANGE),
        buy_price: coerce_decimal(record.get("buy_price")).max(Decimal::ZERO),
        sell_price: coerce_decimal(record.get("sell_price")).max(Decimal::ZERO),
        price_diff_pct: coerce_decimal(record.get("price_diff_pct")),
        profit_per_1000_usd: coerce_decimal(record.get("profit_per_1000_usd")),
    }
}

/// Numeric coercion; anything that is not a usable number becomes zero.
pub fn coerce_decimal(value: Option<&Value>) -> Decimal {
    match value {
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                Decimal::from(i)
            } else if let Some(u) = n.as_u64() {
                Decimal::from_u64(u).unwrap_or_default()
            } else {
                n.as_f64().and_then(Decimal::from_f64).unwrap_or_default()
            }
        }
        Some(Value::String(s)) => parse_decimal_text(s),
        _ => Decimal::ZERO,
    }
}

fn parse_decimal_text(text: &str) -> Decimal {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or_default()
}

fn coerce_text(value: Option<&Value>, placeholder: &str) -> String {
    let text = match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    };

    if text.is_empty() {
        placeholder.to_string()
    } else {
        text
    }
}
