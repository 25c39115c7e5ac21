//! Best-opportunity selection

use crate::types::Opportunity;

/// First row of the filtered and ranked table, if any.
pub fn select_best(ranked: &[Opportunity]) -> Option<&Opportunity> {
    ranked.first()
}
