//! Case-insensitive substring search

use crate::types::Opportunity;

/// Keep opportunities whose token or either exchange contains `query`.
///
/// The query is trimmed and lower-cased; an empty query returns the input unchanged.
pub fn filter(opportunities: &[Opportunity], query: &str) -> Vec<Opportunity> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return opportunities.to_vec();
    }

    opportunities
        .iter()
        .filter(|opp| matches_query(opp, &needle))
        .cloned()
        .collect()
}

fn matches_query(opportunity: &Opportunity, needle: &str) -> bool {
    [
        &opportunity.token,
        &opportunity.buy_exchange,
        &opportunity.sell_exchange,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}
