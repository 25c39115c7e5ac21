//! Ordering by a numeric column

use std::cmp::Ordering;
use crate::types::{Opportunity, SortDirection, SortKey};

/// Return a freshly sorted copy. Ties keep their input order (stable sort), so identical
/// calls always produce identical output.
pub fn rank(opportunities: &[Opportunity], key: SortKey, direction: SortDirection) -> Vec<Opportunity> {
    let mut ranked = opportunities.to_vec();
    ranked.sort_by(|a, b| compare(a, b, key, direction));
    ranked
}

fn compare(a: &Opportunity, b: &Opportunity, key: SortKey, direction: SortDirection) -> Ordering {
    let ordering = key.value_of(a).cmp(&key.value_of(b));
    if direction.is_descending() {
        ordering.reverse()
    } else {
        ordering
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn opp(token: &str, spread: Decimal, buy_price: Decimal) -> Opportunity {
        Opportunity {
            token: token.to_string(),
            price_diff_pct: spread,
            buy_price,
            ..Default::default()
        }
    }

    fn tokens(data: &[Opportunity]) -> Vec<&str> {
        data.iter().map(|o| o.token.as_str()).collect()
    }

    #[test]
    fn test_descending_puts_largest_first() {
        let data = vec![
            opp("A", dec!(0.4), dec!(1)),
            opp("B", dec!(1.7), dec!(2)),
            opp("C", dec!(0.9), dec!(3)),
        ];
        let ranked = rank(&data, SortKey::PriceDiffPct, SortDirection::Descending);
        assert_eq!(tokens(&ranked), vec!["B", "C", "A"]);

        let ranked = rank(&data, SortKey::PriceDiffPct, SortDirection::Ascending);
        assert_eq!(tokens(&ranked), vec!["A", "C", "B"]);
    }

    #[test]
    fn test_other_keys() {
        let data = vec![
            opp("A", dec!(0.4), dec!(30)),
            opp("B", dec!(1.7), dec!(10)),
            opp("C", dec!(0.9), dec!(20)),
        ];
        let ranked = rank(&data, SortKey::BuyPrice, SortDirection::Ascending);
        assert_eq!(tokens(&ranked), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_ties_are_stable_and_repeatable() {
        let data = vec![
            opp("A", dec!(1), dec!(0)),
            opp("B", dec!(2), dec!(0)),
            opp("C", dec!(1), dec!(0)),
            opp("D", dec!(1.0), dec!(0)),
        ];

        let first = rank(&data, SortKey::PriceDiffPct, SortDirection::Descending);
        let second = rank(&data, SortKey::PriceDiffPct, SortDirection::Descending);
        assert_eq!(first, second);
        assert_eq!(tokens(&first), vec!["B", "A", "C", "D"]);
    }

    #[test]
    fn test_input_untouched() {
        let data = vec![opp("A", dec!(1), dec!(0)), opp("B", dec!(2), dec!(0))];
        let _ = rank(&data, SortKey::PriceDiffPct, SortDirection::Descending);
        assert_eq!(tokens(&data), vec!["A", "B"]);
    }
}
