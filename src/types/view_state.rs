//! User-adjustable view settings

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use super::Opportunity;

pub const DEFAULT_FEE_RATE_PCT: Decimal = dec!(0.2);
pub const DEFAULT_INVESTMENT_USD: Decimal = dec!(1000);

/// Numeric columns the table can be ranked by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    BuyPrice,
    SellPrice,
    PriceDiffPct,
    ProfitPer1000Usd,
}

impl SortKey {
    pub fn field_name(&self) -> &'static str {
        match self {
            SortKey::BuyPrice => "buy_price",
            SortKey::SellPrice => "sell_price",
            SortKey::PriceDiffPct => "price_diff_pct",
            SortKey::ProfitPer1000Usd => "profit_per_1000_usd",
        }
    }

    pub fn value_of(&self, opportunity: &Opportunity) -> Decimal {
        match self {
            SortKey::BuyPrice => opportunity.buy_price,
            SortKey::SellPrice => opportunity.sell_price,
            SortKey::PriceDiffPct => opportunity.price_diff_pct,
            SortKey::ProfitPer1000Usd => opportunity.profit_per_1000_usd,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field_name())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "buy_price" | "buy" => Ok(SortKey::BuyPrice),
            "sell_price" | "sell" => Ok(SortKey::SellPrice),
            "price_diff_pct" | "spread" | "diff" => Ok(SortKey::PriceDiffPct),
            "profit_per_1000_usd" | "profit" => Ok(SortKey::ProfitPer1000Usd),
            other => Err(format!("unknown sort field '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn is_descending(&self) -> bool {
        matches!(self, SortDirection::Descending)
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" | "up" => Ok(SortDirection::Ascending),
            "desc" | "descending" | "down" => Ok(SortDirection::Descending),
            other => Err(format!("unknown sort direction '{}'", other)),
        }
    }
}

/// Mutable view settings. Owned by exactly one controller; each field has its own setter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewState {
    query: String,
    sort_key: SortKey,
    sort_direction: SortDirection,
    fee_rate_pct: Decimal,
    investment: Decimal,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_FEE_RATE_PCT, DEFAULT_INVESTMENT_USD)
    }
}

impl ViewState {
    pub fn new(fee_rate_pct: Decimal, investment: Decimal) -> Self {
        Self {
            query: String::new(),
            sort_key: SortKey::PriceDiffPct,
            sort_direction: SortDirection::Descending,
            fee_rate_pct: fee_rate_pct.max(Decimal::ZERO),
            investment: investment.max(Decimal::ZERO),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn fee_rate_pct(&self) -> Decimal {
        self.fee_rate_pct
    }

    pub fn investment(&self) -> Decimal {
        self.investment
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_sort(&mut self, key: SortKey, direction: SortDirection) {
        self.sort_key = key;
        self.sort_direction = direction;
    }

    /// Column-header behaviour: the active key flips direction, a new key starts descending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_key = key;
            self.sort_direction = SortDirection::Descending;
        }
    }

    pub fn set_fee_rate_pct(&mut self, fee_rate_pct: Decimal) {
        self.fee_rate_pct = fee_rate_pct.max(Decimal::ZERO);
    }

    pub fn set_investment(&mut self, investment: Decimal) {
        self.investment = investment.max(Decimal::ZERO);
    }
}
