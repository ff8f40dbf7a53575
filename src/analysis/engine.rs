//! Cash flow and returns engine
//!
//! The single place the deal math lives. Every workflow step (analyzer,
//! MAO, rehab hand-off, dashboards) feeds this engine and renders its
//! output rather than re-deriving the formulas.

use super::amortization::monthly_payment;
use super::results::AnalysisResult;
use crate::deal::PropertyFinancials;

/// Days per month used when prorating holding costs
const DAYS_PER_MONTH: f64 = 30.0;

/// Configuration for an analysis run
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// LTV the lender refinances at, as a fraction of ARV. Kept separate
    /// from the purchase loan's own LTV, which it has nothing to do with.
    pub refinance_ltv: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            refinance_ltv: 0.80,
        }
    }
}

/// Main analysis engine
pub struct AnalysisEngine {
    config: AnalysisConfig,
}

impl AnalysisEngine {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    /// Analyze one deal. Pure: same input, same output, no side effects.
    ///
    /// Numeric edge cases never surface as NaN or infinity. Every ratio
    /// with a zero denominator reports 0.
    pub fn analyze(&self, deal: &PropertyFinancials) -> AnalysisResult {
        let rent = deal.monthly_rent;
        let loan_amount = deal
            .loan_amount
            .unwrap_or(deal.purchase_price - deal.down_payment);

        // Points and buy-downs belong to the loan comparison flow, not
        // here; the mortgage line uses the plain note rate.
        let monthly_mortgage = monthly_payment(loan_amount, deal.annual_rate_pct, deal.term_years);

        let monthly_taxes = deal.fixed_expenses.taxes_annual / 12.0;
        let monthly_insurance = deal.fixed_expenses.insurance_annual / 12.0;
        let maintenance_amount = rent * (deal.expense_rates.maintenance_pct / 100.0);
        let management_amount = rent * (deal.expense_rates.management_pct / 100.0);
        let vacancy_amount = rent * (deal.expense_rates.vacancy_pct / 100.0);
        let monthly_utilities = deal.fixed_expenses.utilities_monthly;
        let other_expenses = deal.fixed_expenses.other_monthly;

        let operating_expenses = monthly_taxes
            + monthly_insurance
            + maintenance_amount
            + management_amount
            + vacancy_amount
            + monthly_utilities
            + other_expenses;
        let total_monthly_expenses = monthly_mortgage + operating_expenses;

        let monthly_cash_flow = rent - total_monthly_expenses;
        let annual_cash_flow = monthly_cash_flow * 12.0;

        // NOI excludes debt service
        let noi = rent * 12.0 - operating_expenses * 12.0;
        let cap_rate_pct = if deal.purchase_price > 0.0 {
            noi / deal.purchase_price * 100.0
        } else {
            0.0
        };

        // Cash in the deal: down payment, rehab, closing, and carrying
        // costs while the property is not yet renting
        let holding_costs = (monthly_taxes + monthly_insurance + monthly_utilities)
            * deal.holding_days as f64
            / DAYS_PER_MONTH;
        let total_invested =
            deal.down_payment + deal.rehab_total + deal.closing_costs + holding_costs;

        let cash_on_cash_return_pct = if total_invested > 0.0 {
            annual_cash_flow / total_invested * 100.0
        } else {
            0.0
        };
        let total_return_pct = if deal.purchase_price > 0.0 {
            annual_cash_flow / deal.purchase_price * 100.0
        } else {
            0.0
        };

        let ltv_pct = if deal.purchase_price > 0.0 {
            loan_amount / deal.purchase_price * 100.0
        } else {
            0.0
        };
        let current_equity = deal.arv - loan_amount;
        let cash_out_at_refi = (deal.arv * self.config.refinance_ltv - loan_amount).max(0.0);

        AnalysisResult {
            purchase_price: deal.purchase_price,
            down_payment: deal.down_payment,
            monthly_rent: rent,
            loan_amount,
            monthly_mortgage,
            ltv_pct,
            monthly_taxes,
            monthly_insurance,
            maintenance_amount,
            management_amount,
            vacancy_amount,
            monthly_utilities,
            other_expenses,
            total_monthly_expenses,
            monthly_cash_flow,
            annual_cash_flow,
            noi,
            cap_rate_pct,
            cash_on_cash_return_pct,
            total_return_pct,
            total_invested,
            current_equity,
            cash_out_at_refi,
        }
    }
}
