//! Remote data source access

pub mod source;

pub use source::*;
