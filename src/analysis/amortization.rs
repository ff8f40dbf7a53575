//! Fixed-rate amortization and rate buy-down break-even math
//!
//! Used for the mortgage line of every deal analysis and for the
//! standalone loan comparison flow.

use serde::{Deserialize, Serialize};

use crate::deal::LoanTerms;

/// Monthly payment for a fully amortizing fixed-rate loan.
///
/// Standard formula `P*r*(1+r)^n / ((1+r)^n - 1)` for a positive monthly
/// rate. A zero rate divides the principal evenly across the term instead
/// of hitting 0/0.
pub fn monthly_payment(principal: f64, annual_rate_pct: f64, term_years: u32) -> f64 {
    let num_payments = (term_years * 12) as f64;
    if principal <= 0.0 || num_payments <= 0.0 {
        return 0.0;
    }

    let monthly_rate = annual_rate_pct / 100.0 / 12.0;
    if monthly_rate > 0.0 {
        let factor = (1.0 + monthly_rate).powf(num_payments);
        principal * monthly_rate * factor / (factor - 1.0)
    } else {
        principal / num_payments
    }
}

/// Full cost picture for one loan option
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanQuote {
    /// Note rate after buy-down, floored at 0
    pub adjusted_rate_pct: f64,

    pub monthly_payment: f64,

    /// Payment times number of payments
    pub total_payments: f64,

    pub total_interest: f64,

    /// Discount points as dollars
    pub points_cost: f64,

    /// Down payment + points + fees + buy-down cost
    pub total_upfront_costs: f64,

    /// Total payments + points + fees + buy-down cost
    pub total_loan_cost: f64,

    /// Payment reduction bought by the rate buy-down
    pub monthly_savings: f64,

    /// Months for the savings to repay the buy-down cost.
    /// `f64::INFINITY` when there are no savings to recover it.
    pub break_even_months: f64,
}

/// Compute the full quote for a loan option.
///
/// The down payment is part of the purchase, not the note, so it arrives
/// as a separate argument rather than a `LoanTerms` field.
pub fn compute_amortization(terms: &LoanTerms, down_payment: f64) -> LoanQuote {
    let adjusted_rate_pct = (terms.annual_rate_pct - terms.rate_buy_down_pct).max(0.0);
    let num_payments = (terms.term_years * 12) as f64;

    let payment = monthly_payment(terms.principal, adjusted_rate_pct, terms.term_years);
    let total_payments = payment * num_payments;
    let total_interest = total_payments - terms.principal;

    let points_cost = terms.principal * (terms.points_pct / 100.0);
    let total_upfront_costs = down_payment + points_cost + terms.fees + terms.buy_down_cost;
    let total_loan_cost = total_payments + points_cost + terms.fees + terms.buy_down_cost;

    // Break-even compares against the payment at the un-bought-down rate
    let original_payment = monthly_payment(terms.principal, terms.annual_rate_pct, terms.term_years);
    let monthly_savings = original_payment - payment;
    let break_even_months = if monthly_savings > 0.0 {
        terms.buy_down_cost / monthly_savings
    } else {
        f64::INFINITY
    };

    LoanQuote {
        adjusted_rate_pct,
        monthly_payment: payment,
        total_payments,
        total_interest,
        points_cost,
        total_upfront_costs,
        total_loan_cost,
        monthly_savings,
        break_even_months,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_rate_divides_evenly() {
        let payment = monthly_payment(120_000.0, 0.0, 30);
        assert_relative_eq!(payment, 120_000.0 / 360.0, max_relative = 1e-12);

        let quote = compute_amortization(&LoanTerms::simple(120_000.0, 0.0, 30), 0.0);
        assert!(quote.total_interest.abs() < 1e-6);
    }

    #[test]
    fn test_standard_thirty_year_payment() {
        // 160k at 6.5% over 30 years, the classic reference case
        let payment = monthly_payment(160_000.0, 6.5, 30);
        assert!((payment - 1011.31).abs() < 0.01, "got {}", payment);
    }

    #[test]
    fn test_buy_down_break_even() {
        let terms = LoanTerms {
            principal: 160_000.0,
            annual_rate_pct: 6.5,
            term_years: 30,
            points_pct: 0.0,
            fees: 2_000.0,
            rate_buy_down_pct: 0.5,
            buy_down_cost: 4_000.0,
        };

        let quote = compute_amortization(&terms, 40_000.0);
        assert_eq!(quote.adjusted_rate_pct, 6.0);
        assert!(quote.monthly_savings > 0.0);
        assert!(quote.break_even_months.is_finite());
        assert_relative_eq!(
            quote.break_even_months,
            4_000.0 / quote.monthly_savings,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_break_even_never_without_savings() {
        // Buy-down cost paid but no rate reduction bought
        let terms = LoanTerms {
            principal: 160_000.0,
            annual_rate_pct: 6.5,
            term_years: 30,
            points_pct: 0.0,
            fees: 0.0,
            rate_buy_down_pct: 0.0,
            buy_down_cost: 3_000.0,
        };

        let quote = compute_amortization(&terms, 0.0);
        assert_eq!(quote.monthly_savings, 0.0);
        assert!(quote.break_even_months.is_infinite());
    }

    #[test]
    fn test_upfront_costs_are_additive() {
        let terms = LoanTerms {
            principal: 200_000.0,
            annual_rate_pct: 7.0,
            term_years: 30,
            points_pct: 1.0,
            fees: 2_500.0,
            rate_buy_down_pct: 0.0,
            buy_down_cost: 0.0,
        };

        let quote = compute_amortization(&terms, 50_000.0);
        assert_relative_eq!(quote.points_cost, 2_000.0, max_relative = 1e-12);
        assert_relative_eq!(
            quote.total_upfront_costs,
            50_000.0 + 2_000.0 + 2_500.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_rate_floors_at_zero() {
        let terms = LoanTerms {
            principal: 100_000.0,
            annual_rate_pct: 1.0,
            term_years: 15,
            points_pct: 0.0,
            fees: 0.0,
            rate_buy_down_pct: 2.0,
            buy_down_cost: 1_000.0,
        };

        let quote = compute_amortization(&terms, 0.0);
        assert_eq!(quote.adjusted_rate_pct, 0.0);
        // Floored to a zero-rate loan: straight principal division
        assert_relative_eq!(
            quote.monthly_payment,
            100_000.0 / 180.0,
            max_relative = 1e-12
        );
    }
}
