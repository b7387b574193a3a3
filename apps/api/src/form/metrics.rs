use serde::Serialize;

use crate::models::profile::FormDetails;

/// Months of expenses an emergency fund should cover.
pub const EMERGENCY_MONTHS: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FormMetrics {
    pub monthly_surplus: f64,
    /// Percent of take-home pay left after expenses.
    pub savings_rate: f64,
    pub emergency_fund_target: f64,
    /// Months of expenses current savings would cover.
    pub emergency_fund_coverage: f64,
}

impl FormMetrics {
    pub fn compute(form: &FormDetails) -> Self {
        let coverage = if form.monthly_expenses > 0.0 {
            form.current_savings / form.monthly_expenses
        } else {
            0.0
        };
        FormMetrics {
            monthly_surplus: form.monthly_surplus(),
            savings_rate: form.savings_rate(),
            emergency_fund_target: form.monthly_expenses * EMERGENCY_MONTHS,
            emergency_fund_coverage: coverage,
        }
    }
}
