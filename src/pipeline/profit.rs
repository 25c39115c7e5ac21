//! Investment outcome projections
//!
//! All outputs stay numeric; currency and percentage rendering happens in `utils::display`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use crate::types::{InvestmentTier, Opportunity, ProfitProjection, STANDARD_TIER_MULTIPLIERS};

/// Project one round trip: buy `investment` worth at `buy_price`, sell at `sell_price`,
/// paying `fee_rate_pct` percent of the investment on each leg.
///
/// Non-positive prices or investments never error: units (resp. ROI) fall back to zero.
/// A step that leaves the Decimal range saturates at `Decimal::MAX` / `Decimal::MIN` with
/// the sign the exact result would have had, so a tiny buy price still reads as a large gain.
pub fn project(
    investment: Decimal,
    buy_price: Decimal,
    sell_price: Decimal,
    fee_rate_pct: Decimal,
) -> ProfitProjection {
    let units = if buy_price > Decimal::ZERO {
        saturating_div(investment, buy_price)
    } else {
        Decimal::ZERO
    };
    let value = saturating_mul(units, sell_price);
    let gross = saturating_add(value, -investment);

    // Charged symmetrically on the buy and the sell leg
    let fees = -saturating_mul(saturating_mul(fee_rate_pct / dec!(100), investment), dec!(2));
    let net = saturating_add(gross, fees);

    let roi_pct = if investment > Decimal::ZERO {
        saturating_mul(saturating_div(net, investment), dec!(100))
    } else {
        Decimal::ZERO
    };

    ProfitProjection {
        investment,
        units,
        value,
        gross,
        fees,
        net,
        roi_pct,
    }
}

pub fn project_opportunity(
    opportunity: &Opportunity,
    investment: Decimal,
    fee_rate_pct: Decimal,
) -> ProfitProjection {
    project(investment, opportunity.buy_price, opportunity.sell_price, fee_rate_pct)
}

/// Projections for the 1x, 5x and 10x tiers of `base_investment`, all on the same prices.
pub fn project_tiers(
    opportunity: &Opportunity,
    base_investment: Decimal,
    fee_rate_pct: Decimal,
) -> Vec<InvestmentTier> {
    STANDARD_TIER_MULTIPLIERS
        .iter()
        .map(|&multiplier| {
            let investment = saturating_mul(base_investment, Decimal::from(multiplier));
            InvestmentTier {
                multiplier,
                projection: project_opportunity(opportunity, investment, fee_rate_pct),
            }
        })
        .collect()
}

fn bound(negative: bool) -> Decimal {
    if negative { Decimal::MIN } else { Decimal::MAX }
}

fn saturating_mul(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b)
        .unwrap_or_else(|| bound(a.is_sign_negative() != b.is_sign_negative()))
}

// Callers guarantee a non-zero divisor
fn saturating_div(a: Decimal, b: Decimal) -> Decimal {
    a.checked_div(b)
        .unwrap_or_else(|| bound(a.is_sign_negative() != b.is_sign_negative()))
}

// Addition only overflows when both operands share a sign
fn saturating_add(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).unwrap_or_else(|| bound(a.is_sign_negative()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_round_trip() {
        let p = project(dec!(1000), dec!(100), dec!(110), dec!(0.2));
        assert_eq!(p.units, dec!(10));
        assert_eq!(p.value, dec!(1100));
        assert_eq!(p.gross, dec!(100));
        assert_eq!(p.fees, dec!(-4));
        assert_eq!(p.net, dec!(96));
        assert_eq!(p.roi_pct, dec!(9.6));
    }

    #[test]
    fn test_zero_buy_price_falls_back() {
        let p = project(dec!(1000), Decimal::ZERO, dec!(110), dec!(0.2));
        assert_eq!(p.units, Decimal::ZERO);
        assert_eq!(p.value, Decimal::ZERO);
        assert_eq!(p.gross, dec!(-1000));
        assert_eq!(p.fees, dec!(-4));
        assert_eq!(p.net, dec!(-1004));
        assert_eq!(p.roi_pct, dec!(-100.4));
    }

    #[test]
    fn test_zero_investment_has_zero_roi() {
        let p = project(Decimal::ZERO, dec!(100), dec!(110), dec!(0.2));
        assert_eq!(p.units, Decimal::ZERO);
        assert_eq!(p.net, Decimal::ZERO);
        assert_eq!(p.roi_pct, Decimal::ZERO);
    }

    #[test]
    fn test_losing_trade() {
        let p = project(dec!(1000), dec!(100), dec!(95), Decimal::ZERO);
        assert_eq!(p.gross, dec!(-50));
        assert_eq!(p.fees, Decimal::ZERO);
        assert_eq!(p.roi_pct, dec!(-5));
    }

    #[test]
    fn test_tiers_scale_investment_on_same_prices() {
        let opportunity = Opportunity {
            token: "BTC".to_string(),
            buy_price: dec!(100),
            sell_price: dec!(110),
            ..Default::default()
        };

        let tiers = project_tiers(&opportunity, dec!(1000), dec!(0.2));
        let multipliers: Vec<u32> = tiers.iter().map(|t| t.multiplier).collect();
        assert_eq!(multipliers, vec![1, 5, 10]);

        assert_eq!(tiers[1].projection.investment, dec!(5000));
        assert_eq!(tiers[1].projection.net, dec!(480));
        assert_eq!(tiers[2].projection.net, dec!(960));
        // ROI does not depend on the tier
        assert!(tiers.iter().all(|t| t.projection.roi_pct == dec!(9.6)));
    }

    #[test]
    fn test_extreme_inputs_do_not_panic() {
        let p = project(Decimal::MAX, dec!(0.0000000001), Decimal::MAX, dec!(10));
        assert_eq!(p.units, Decimal::MAX);
        assert_eq!(p.value, Decimal::MAX);
        assert_eq!(p.gross, Decimal::ZERO);
        assert!(p.fees < Decimal::ZERO);
        assert!(p.roi_pct < Decimal::ZERO);
    }

    #[test]
    fn test_tiny_buy_price_saturates_as_gain() {
        let p = project(dec!(1000), Decimal::new(1, 28), dec!(2), dec!(0.2));
        assert_eq!(p.units, Decimal::MAX);
        assert_eq!(p.value, Decimal::MAX);
        assert_eq!(p.gross, Decimal::MAX - dec!(1000));
        assert_eq!(p.fees, dec!(-4));
        assert_eq!(p.net, Decimal::MAX - dec!(1004));
        assert!(p.roi_pct > dec!(1000000));
    }

    #[test]
    fn test_negative_overflow_saturates_low() {
        // Fee rate large enough that the fee product leaves the range
        let p = project(Decimal::MAX, dec!(1), dec!(1), Decimal::MAX);
        assert_eq!(p.fees, -Decimal::MAX);
        assert_eq!(p.net, Decimal::MIN);
        assert!(p.roi_pct < Decimal::ZERO);
    }
}
