//! Display and printing utilities
//!
//! Everything here sits downstream of the numeric pipeline and only turns finished
//! numbers into text.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{error, info, warn};
use crate::types::{DashboardView, DataStatus, InvestmentTier, Opportunity};

const NO_DATA: &str = "N/A";

pub fn format_usd(amount: Decimal) -> String {
    let (sign, digits) = format_grouped(amount, 2);
    format!("{}${}", sign, digits)
}

/// Quote prices get more precision than cash amounts
pub fn format_price(price: Decimal) -> String {
    let (sign, digits) = format_grouped(price, 4);
    format!("{}${}", sign, digits)
}

pub fn format_units(units: Decimal) -> String {
    let (sign, digits) = format_grouped(units, 6);
    format!("{}{}", sign, digits)
}

pub fn format_pct(pct: Decimal) -> String {
    let (sign, digits) = format_grouped(pct, 2);
    format!("{}{}%", sign, digits)
}

/// Percentage with an explicit `+` for gains, used for ROI
pub fn format_signed_pct(pct: Decimal) -> String {
    let text = format_pct(pct);
    if text.starts_with('-') || rounded(pct, 2).is_zero() {
        text
    } else {
        format!("+{}", text)
    }
}

pub fn format_spread(spread: Option<Decimal>) -> String {
    spread.map(format_pct).unwrap_or_else(|| NO_DATA.to_string())
}

fn rounded(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

fn format_grouped(value: Decimal, dp: u32) -> (&'static str, String) {
    let value = rounded(value, dp);
    let sign = if value.is_sign_negative() && !value.is_zero() { "-" } else { "" };
    let text = format!("{:.*}", dp as usize, value.abs());

    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(text.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    (sign, grouped)
}

pub fn print_dashboard(view: &DashboardView, max_rows: usize) {
    let updated = view
        .last_updated
        .map(|t| t.format("%H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "never".to_string());

    info!("\n📊 Cross-Exchange Spreads (updated {}, theme {})", updated, view.theme);

    match view.status {
        DataStatus::Loading => {
            info!("   ⏳ Loading quotes...");
            return;
        }
        DataStatus::Error => {
            if let Some(message) = &view.error {
                error!("   ❌ {}", message);
            }
        }
        DataStatus::NoData => info!("   No opportunities available right now"),
        DataStatus::Ready => {}
    }

    info!("   📈 Opportunities: {}", view.metrics.count);
    info!("   Max spread: {}", format_spread(view.metrics.max_spread));
    info!("   Avg spread: {}", format_spread(view.metrics.avg_spread));

    let state = &view.view_state;
    info!(
        "   Sorted by {} ({}), fee {} per leg, investment {}",
        state.sort_key(),
        if state.sort_direction().is_descending() { "desc" } else { "asc" },
        format_pct(state.fee_rate_pct()),
        format_usd(state.investment())
    );
    if !state.query().trim().is_empty() {
        info!("   🔎 Filter: \"{}\" ({} matches)", state.query().trim(), view.rows.len());
    }

    print_rows(&view.rows, max_rows);

    if let Some(best) = &view.best {
        print_best_opportunity(best, &view.tiers);
    }
    info!("");
}

fn print_rows(rows: &[Opportunity], max_rows: usize) {
    if rows.is_empty() {
        return;
    }

    info!(
        "   {:<3} {:<10} {:<28} {:>16} {:>16} {:>9} {:>12}",
        "#", "Token", "Route", "Buy", "Sell", "Spread", "Profit/$1k"
    );
    for (i, opp) in rows.iter().take(max_rows).enumerate() {
        info!(
            "   {:<3} {:<10} {:<28} {:>16} {:>16} {:>9} {:>12}",
            i + 1,
            opp.token,
            opp.route(),
            format_price(opp.buy_price),
            format_price(opp.sell_price),
            format_pct(opp.price_diff_pct),
            format_usd(opp.profit_per_1000_usd)
        );
    }
    if rows.len() > max_rows {
        info!("   ... {} more", rows.len() - max_rows);
    }
}

pub fn print_best_opportunity(best: &Opportunity, tiers: &[InvestmentTier]) {
    warn!("\n🎯 BEST OPPORTUNITY: {}", best.token);
    warn!("📋 Route: {}", best.route());
    warn!("   Buy:    {}", format_price(best.buy_price));
    warn!("   Sell:   {}", format_price(best.sell_price));
    warn!("   Spread: {}", format_pct(best.price_diff_pct));

    if tiers.is_empty() {
        return;
    }

    warn!("💰 Profit Projection:");
    warn!(
        "   {:>4} {:>14} {:>16} {:>14} {:>12} {:>14} {:>9}",
        "Tier", "Investment", "Units", "Gross", "Fees", "Net", "ROI"
    );
    for tier in tiers {
        let p = &tier.projection;
        warn!(
            "   {:>3}x {:>14} {:>16} {:>14} {:>12} {:>14} {:>9}",
            tier.multiplier,
            format_usd(p.investment),
            format_units(p.units),
            format_usd(p.gross),
            format_usd(p.fees),
            format_usd(p.net),
            format_signed_pct(p.roi_pct)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_usd_grouping_and_sign() {
        assert_eq!(format_usd(dec!(1234567.891)), "$1,234,567.89");
        assert_eq!(format_usd(dec!(-4)), "-$4.00");
        assert_eq!(format_usd(dec!(999.995)), "$1,000.00");
        assert_eq!(format_usd(dec!(-0.001)), "$0.00");
        assert_eq!(format_usd(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn test_percentages() {
        assert_eq!(format_pct(dec!(9.6)), "9.60%");
        assert_eq!(format_signed_pct(dec!(9.6)), "+9.60%");
        assert_eq!(format_signed_pct(dec!(-100.4)), "-100.40%");
        assert_eq!(format_signed_pct(Decimal::ZERO), "0.00%");
    }

    #[test]
    fn test_spread_placeholder() {
        assert_eq!(format_spread(None), "N/A");
        assert_eq!(format_spread(Some(dec!(0))), "0.00%");
    }

    #[test]
    fn test_price_and_units_precision() {
        assert_eq!(format_price(dec!(64000.5)), "$64,000.5000");
        assert_eq!(format_units(dec!(10)), "10.000000");
        assert_eq!(format_units(dec!(1000) / dec!(3)), "333.333333");
    }
}
