//! Summary statistics over the full normalized set

use rust_decimal::Decimal;
use crate::types::{Metrics, Opportunity};

pub fn aggregate(opportunities: &[Opportunity]) -> Metrics {
    let count = opportunities.len();
    if count == 0 {
        return Metrics::default();
    }

    let max_spread = opportunities.iter().map(|o| o.price_diff_pct).max();

    // Decimal sums can overflow on absurd inputs; report no average rather than panic
    let avg_spread = opportunities
        .iter()
        .try_fold(Decimal::ZERO, |acc, o| acc.checked_add(o.price_diff_pct))
        .and_then(|total| total.checked_div(Decimal::from(count)));

    Metrics {
        count,
        max_spread,
        avg_spread,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn with_spread(spread: Decimal) -> Opportunity {
        Opportunity {
            price_diff_pct: spread,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_set_reports_no_data() {
        let metrics = aggregate(&[]);
        assert_eq!(metrics.count, 0);
        assert_eq!(metrics.max_spread, None);
        assert_eq!(metrics.avg_spread, None);
    }

    #[test]
    fn test_max_and_mean() {
        let data = vec![with_spread(dec!(0.5)), with_spread(dec!(1.5)), with_spread(dec!(1.0))];
        let metrics = aggregate(&data);
        assert_eq!(metrics.count, 3);
        assert_eq!(metrics.max_spread, Some(dec!(1.5)));
        assert_eq!(metrics.avg_spread, Some(dec!(1.0)));
    }

    #[test]
    fn test_all_zero_spreads_are_still_data() {
        let metrics = aggregate(&[Opportunity::default()]);
        assert_eq!(metrics.max_spread, Some(Decimal::ZERO));
        assert_eq!(metrics.avg_spread, Some(Decimal::ZERO));
    }

    #[test]
    fn test_negative_spreads() {
        let data = vec![with_spread(dec!(-2)), with_spread(dec!(-1))];
        let metrics = aggregate(&data);
        assert_eq!(metrics.max_spread, Some(dec!(-1)));
        assert_eq!(metrics.avg_spread, Some(dec!(-1.5)));
    }
}
