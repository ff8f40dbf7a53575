//! Analysis output structures

use serde::{Deserialize, Serialize};

/// Full output of one cash flow and returns analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    // Deal echo
    pub purchase_price: f64,
    pub down_payment: f64,
    pub monthly_rent: f64,

    // Loan
    pub loan_amount: f64,
    pub monthly_mortgage: f64,
    pub ltv_pct: f64,

    // Monthly expense lines
    pub monthly_taxes: f64,
    pub monthly_insurance: f64,
    pub maintenance_amount: f64,
    pub management_amount: f64,
    pub vacancy_amount: f64,
    pub monthly_utilities: f64,
    pub other_expenses: f64,
    pub total_monthly_expenses: f64,

    // Cash flow
    pub monthly_cash_flow: f64,
    pub annual_cash_flow: f64,

    // Returns
    /// Annual net operating income. Excludes debt service by convention,
    /// even though `total_monthly_expenses` includes the mortgage.
    pub noi: f64,
    pub cap_rate_pct: f64,
    pub cash_on_cash_return_pct: f64,
    pub total_return_pct: f64,
    pub total_invested: f64,

    // Equity and refinance
    pub current_equity: f64,
    pub cash_out_at_refi: f64,
}

impl AnalysisResult {
    /// The monthly operating expense total, without the mortgage
    pub fn monthly_operating_expenses(&self) -> f64 {
        self.total_monthly_expenses - self.monthly_mortgage
    }

    /// Whether the deal carries itself at these numbers
    pub fn is_cash_flow_positive(&self) -> bool {
        self.monthly_cash_flow >= 0.0
    }
}
