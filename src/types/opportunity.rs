//! Spread opportunity types

use rust_decimal::Decimal;
use serde::Serialize;

/// Untrusted quote record exactly as the data source delivered it.
pub type RawQuoteRecord = serde_json::Value;

pub const UNKNOWN_TOKEN: &str = "UNKNOWN";
pub const UNKNOWN_EXCHANGE: &str = "-";

/// A normalized cross-exchange spread. Every field is always populated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Opportunity {
    pub token: String,
    pub buy_exchange: String,
    pub sell_exchange: String,
    pub buy_price: Decimal,
    pub sell_price: Decimal,
    pub price_diff_pct: Decimal,
    pub profit_per_1000_usd: Decimal,
}

impl Default for Opportunity {
    fn default() -> Self {
        Self {
            token: UNKNOWN_TOKEN.to_string(),
            buy_exchange: UNKNOWN_EXCHANGE.to_string(),
            sell_exchange: UNKNOWN_EXCHANGE.to_string(),
            buy_price: Decimal::ZERO,
            sell_price: Decimal::ZERO,
            price_diff_pct: Decimal::ZERO,
            profit_per_1000_usd: Decimal::ZERO,
        }
    }
}

impl Opportunity {
    /// Short route label, e.g. "Binance → Kraken"
    pub fn route(&self) -> String {
        format!("{} → {}", self.buy_exchange, self.sell_exchange)
    }
}
