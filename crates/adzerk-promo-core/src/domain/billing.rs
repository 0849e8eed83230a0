//! Billing for completed campaigns.
//!
//! Amounts are integer cents. CPM is the price per thousand impressions.
//! Only whole thousands of impressions are billed; a partial thousand is
//! dropped before the price is applied.

use serde::{Deserialize, Serialize};

/// `min(budget, (impressions / 1000) * cpm)` with integer division.
pub fn billable_amount(budget_cents: u64, impressions: u64, cpm_cents: u64) -> u64 {
    let delivered = u128::from(impressions / 1000) * u128::from(cpm_cents);
    u64::try_from(delivered).map_or(budget_cents, |d| d.min(budget_cents))
}

pub fn refund_amount(budget_cents: u64, billable_cents: u64) -> u64 {
    budget_cents.saturating_sub(billable_cents)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub billable_cents: u64,
    pub refund_cents: u64,
}

impl Settlement {
    pub fn compute(budget_cents: u64, impressions: u64, cpm_cents: u64) -> Self {
        let billable_cents = billable_amount(budget_cents, impressions, cpm_cents);
        Self {
            billable_cents,
            refund_cents: refund_amount(budget_cents, billable_cents),
        }
    }

    pub fn is_fully_billed(&self) -> bool {
        self.refund_cents == 0
    }
}
