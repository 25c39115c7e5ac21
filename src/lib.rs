//! Arbitrage Spread Monitor - cross-exchange spread dashboard
//!
//! Turns raw, possibly malformed price-quote records into a ranked, filterable view and
//! projects trading profit for the best opportunity under adjustable investment and fee
//! assumptions. The pipeline itself is pure; fetching, scheduling and presentation live
//! around it.

pub mod config;
pub mod types;
pub mod errors;
pub mod pipeline;
pub mod network;
pub mod storage;
pub mod controller;
pub mod utils;

// Re-export commonly used items
pub use config::{Config, CONFIG};
pub use errors::{DashboardError, DashboardResult};
pub use types::*;
