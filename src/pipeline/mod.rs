//! Pure transformation pipeline: raw quotes → normalized → filtered → ranked view rows,
//! with metrics over the normalized set and projections for the best row.

pub mod normalizer;
pub mod filter;
pub mod ranking;
pub mod metrics;
pub mod profit;
pub mod selector;

pub use normalizer::*;
pub use filter::*;
pub use ranking::*;
pub use metrics::*;
pub use profit::*;
pub use selector::*;

use crate::types::{InvestmentTier, Metrics, Opportunity, ViewState};

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub rows: Vec<Opportunity>,
    pub metrics: Metrics,
    pub best: Option<Opportunity>,
    pub tiers: Vec<InvestmentTier>,
}

/// Run every stage from scratch against the current snapshot and view settings.
pub fn compute_view(snapshot: &[Opportunity], view_state: &ViewState) -> PipelineOutput {
    let filtered = filter(snapshot, view_state.query());
    let rows = rank(&filtered, view_state.sort_key(), view_state.sort_direction());
    let metrics = aggregate(snapshot);

    let best = select_best(&rows).cloned();
    let tiers = best
        .as_ref()
        .map(|opp| project_tiers(opp, view_state.investment(), view_state.fee_rate_pct()))
        .unwrap_or_default();

    PipelineOutput {
        rows,
        metrics,
        best,
        tiers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SortDirection, SortKey};
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn snapshot() -> Vec<Opportunity> {
        normalize(&json!([
            { "token": "BTC", "buy_exchange": "Binance", "sell_exchange": "Kraken",
              "buy_price": 100, "sell_price": 101, "price_diff_pct": 1.0 },
            { "token": "ETH", "buy_exchange": "Coinbase", "sell_exchange": "OKX",
              "buy_price": 100, "sell_price": 110, "price_diff_pct": 10.0 },
            { "token": "SOL", "buy_exchange": "Kraken", "sell_exchange": "Bybit",
              "buy_price": 20, "sell_price": 20.4, "price_diff_pct": 2.0 }
        ]))
    }

    #[test]
    fn test_default_view_ranks_by_spread() {
        let output = compute_view(&snapshot(), &ViewState::default());
        let tokens: Vec<&str> = output.rows.iter().map(|o| o.token.as_str()).collect();
        assert_eq!(tokens, vec!["ETH", "SOL", "BTC"]);

        let best = output.best.expect("best row");
        assert_eq!(best.token, "ETH");
        assert_eq!(output.tiers.len(), 3);
        assert_eq!(output.tiers[0].projection.net, dec!(96));
    }

    #[test]
    fn test_metrics_ignore_filter() {
        let mut state = ViewState::default();
        state.set_query("kraken");
        let output = compute_view(&snapshot(), &state);

        assert_eq!(output.rows.len(), 2);
        assert_eq!(output.metrics.count, 3);
        assert_eq!(output.metrics.max_spread, Some(dec!(10)));
    }

    #[test]
    fn test_best_comes_from_filtered_rows() {
        let mut state = ViewState::default();
        state.set_query("kraken");
        state.set_sort(SortKey::PriceDiffPct, SortDirection::Ascending);
        let output = compute_view(&snapshot(), &state);

        assert_eq!(output.best.map(|o| o.token), Some("BTC".to_string()));
    }

    #[test]
    fn test_no_match_omits_best_and_tiers() {
        let mut state = ViewState::default();
        state.set_query("doge");
        let output = compute_view(&snapshot(), &state);

        assert!(output.rows.is_empty());
        assert!(output.best.is_none());
        assert!(output.tiers.is_empty());
        assert_eq!(output.metrics.count, 3);
    }
}
