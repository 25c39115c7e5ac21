//! Core data types and structures

pub mod opportunity;
pub mod view_state;
pub mod metrics;
pub mod projection;
pub mod preferences;
pub mod view;

pub use opportunity::*;
pub use view_state::*;
pub use metrics::*;
pub use projection::*;
pub use preferences::*;
pub use view::*;
