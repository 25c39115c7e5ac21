//! Summary statistics types

use rust_decimal::Decimal;
use serde::Serialize;

/// Aggregate over the full normalized set. `None` spreads mean there was no data.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Metrics {
    pub count: usize,
    pub max_spread: Option<Decimal>,
    pub avg_spread: Option<Decimal>,
}
