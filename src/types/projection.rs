//! Profit projection types

use rust_decimal::Decimal;
use serde::Serialize;

/// Standard investment multiples shown in the projection table
pub const STANDARD_TIER_MULTIPLIERS: [u32; 3] = [1, 5, 10];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfitProjection {
    pub investment: Decimal,
    pub units: Decimal,
    pub value: Decimal,
    pub gross: Decimal,
    pub fees: Decimal,
    pub net: Decimal,
    pub roi_pct: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestmentTier {
    pub multiplier: u32,
    pub projection: ProfitProjection,
}
