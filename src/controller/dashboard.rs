//! Single owner of the view state and the current opportunity snapshot

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{debug, info, warn};
use crate::{
    errors::DashboardResult,
    pipeline::{compute_view, normalize},
    types::{DashboardView, DataStatus, Opportunity, SortDirection, SortKey, Theme, ViewState},
};

/// Every mutation goes through a method here and ends with a full recompute of the view;
/// nothing is patched incrementally.
pub struct DashboardController {
    view_state: ViewState,
    snapshot: Vec<Opportunity>,
    status: DataStatus,
    last_updated: Option<DateTime<Utc>>,
    last_error: Option<String>,
    theme: Theme,
    view: DashboardView,
}

impl DashboardController {
    pub fn new(view_state: ViewState, theme: Theme) -> Self {
        let mut controller = Self {
            view_state,
            snapshot: Vec::new(),
            status: DataStatus::Loading,
            last_updated: None,
            last_error: None,
            theme,
            view: DashboardView::default(),
        };
        controller.recompute();
        controller
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    pub fn snapshot(&self) -> &[Opportunity] {
        &self.snapshot
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Replace the snapshot wholesale with the outcome of one fetch.
    pub fn apply_refresh(&mut self, result: DashboardResult<Value>, at: DateTime<Utc>) {
        match result {
            Ok(payload) if payload.is_array() => {
                self.snapshot = normalize(&payload);
                self.last_error = None;
                self.status = if self.snapshot.is_empty() {
                    DataStatus::NoData
                } else {
                    DataStatus::Ready
                };
                info!(records = self.snapshot.len(), "📥 Quote snapshot replaced");
            }
            Ok(payload) => {
                warn!(
                    kind = json_kind(&payload),
                    "Quote feed returned a non-array payload, treating as no data"
                );
                self.snapshot.clear();
                self.last_error = None;
                self.status = DataStatus::NoData;
            }
            Err(e) => {
                warn!("❌ Refresh failed: {}", e);
                self.snapshot.clear();
                self.last_error = Some(e.user_message());
                self.status = DataStatus::Error;
            }
        }

        self.last_updated = Some(at);
        self.recompute();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.view_state.set_query(query);
        self.recompute();
    }

    pub fn set_sort(&mut self, key: SortKey, direction: SortDirection) {
        self.view_state.set_sort(key, direction);
        self.recompute();
    }

    pub fn toggle_sort(&mut self, key: SortKey) {
        self.view_state.toggle_sort(key);
        self.recompute();
    }

    pub fn set_fee_rate_pct(&mut self, fee_rate_pct: Decimal) {
        self.view_state.set_fee_rate_pct(fee_rate_pct);
        self.recompute();
    }

    pub fn set_investment(&mut self, investment: Decimal) {
        self.view_state.set_investment(investment);
        self.recompute();
    }

    /// Theme is presentation only; rows, metrics and tiers are left as they are.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.view.theme = theme;
    }

    fn recompute(&mut self) {
        let output = compute_view(&self.snapshot, &self.view_state);

        debug!(
            rows = output.rows.len(),
            total = output.metrics.count,
            best = output.best.as_ref().map(|o| o.token.as_str()),
            "View recomputed"
        );

        self.view = DashboardView {
            rows: output.rows,
            metrics: output.metrics,
            best: output.best,
            tiers: output.tiers,
            status: self.status,
            last_updated: self.last_updated,
            error: self.last_error.clone(),
            theme: self.theme,
            view_state: self.view_state.clone(),
        };
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
