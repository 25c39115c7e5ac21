//! Error types shared across the dashboard

pub mod dashboard_error;

pub use dashboard_error::*;
