//! Derived dashboard view model

use chrono::{DateTime, Utc};
use serde::Serialize;
use super::{InvestmentTier, Metrics, Opportunity, Theme, ViewState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DataStatus {
    /// No refresh has completed yet
    Loading,
    Ready,
    /// The source answered but had nothing usable
    NoData,
    Error,
}

/// Everything the presentation layer needs, recomputed from scratch on every change.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub rows: Vec<Opportunity>,
    pub metrics: Metrics,
    pub best: Option<Opportunity>,
    pub tiers: Vec<InvestmentTier>,
    pub status: DataStatus,
    pub last_updated: Option<DateTime<Utc>>,
    pub error: Option<String>,
    pub theme: Theme,
    pub view_state: ViewState,
}

impl Default for DashboardView {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            metrics: Metrics::default(),
            best: None,
            tiers: Vec::new(),
            status: DataStatus::Loading,
            last_updated: None,
            error: None,
            theme: Theme::default(),
            view_state: ViewState::default(),
        }
    }
}
