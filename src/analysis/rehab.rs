//! Rehab estimate aggregation

use serde::{Deserialize, Serialize};

use crate::deal::{RehabEstimate, RehabScope};

/// Aggregated rehab figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RehabTotals {
    pub subtotal: f64,
    pub contingency_amount: f64,
    pub total: f64,
}

/// Roll an estimate up to subtotal, contingency, and total.
///
/// Lump-sum estimates use the supplied figure directly (floored at 0).
/// Itemized estimates skip draft rows (empty or whitespace-only names) and
/// floor each quantity at 1.
pub fn aggregate_rehab(estimate: &RehabEstimate) -> RehabTotals {
    let subtotal = match &estimate.scope {
        RehabScope::Total(amount) => {
            if amount.is_finite() {
                amount.max(0.0)
            } else {
                0.0
            }
        }
        RehabScope::LineItems(items) => items
            .iter()
            .filter(|item| !item.name.trim().is_empty())
            .map(|item| item.cost() * item.quantity.max(1) as f64)
            .sum(),
    };

    let contingency_amount = subtotal * (estimate.contingency_pct / 100.0);

    RehabTotals {
        subtotal,
        contingency_amount,
        total: subtotal + contingency_amount,
    }
}
