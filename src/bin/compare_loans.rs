//! Compare loan options side by side, including rate buy-down break-even
//!
//! Usage: cargo run --bin compare_loans

use anyhow::Context;
use deal_engine::{
    analysis::compute_amortization,
    deal::LoanTerms,
    format::{format_break_even, format_currency, format_percent},
};
use std::fs::File;
use std::io::Write;

/// A named loan option with its down payment
struct LoanOption {
    name: &'static str,
    terms: LoanTerms,
    down_payment: f64,
}

fn loan_options() -> Vec<LoanOption> {
    vec![
        LoanOption {
            name: "Baseline 6.5%",
            terms: LoanTerms {
                principal: 160_000.0,
                annual_rate_pct: 6.5,
                term_years: 30,
                points_pct: 0.0,
                fees: 2_000.0,
                rate_buy_down_pct: 0.0,
                buy_down_cost: 0.0,
            },
            down_payment: 40_000.0,
        },
        LoanOption {
            name: "Buy down to 6.0%",
            terms: LoanTerms {
                principal: 160_000.0,
                annual_rate_pct: 6.5,
                term_years: 30,
                points_pct: 0.0,
                fees: 2_000.0,
                rate_buy_down_pct: 0.5,
                buy_down_cost: 4_000.0,
            },
            down_payment: 40_000.0,
        },
        LoanOption {
            name: "1 point, 6.25%",
            terms: LoanTerms {
                principal: 160_000.0,
                annual_rate_pct: 6.25,
                term_years: 30,
                points_pct: 1.0,
                fees: 2_000.0,
                rate_buy_down_pct: 0.0,
                buy_down_cost: 0.0,
            },
            down_payment: 40_000.0,
        },
    ]
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = loan_options();

    println!("Loan Comparison ({} options)", options.len());
    println!("{}", "=".repeat(60));

    let quotes: Vec<_> = options
        .iter()
        .map(|o| compute_amortization(&o.terms, o.down_payment))
        .collect();

    for (option, quote) in options.iter().zip(&quotes) {
        println!("\n{}", option.name);
        println!("  Rate (adjusted):   {}", format_percent(quote.adjusted_rate_pct));
        println!("  Monthly payment:   {}", format_currency(quote.monthly_payment));
        println!("  Total interest:    {}", format_currency(quote.total_interest));
        println!("  Points cost:       {}", format_currency(quote.points_cost));
        println!("  Upfront costs:     {}", format_currency(quote.total_upfront_costs));
        println!("  Total loan cost:   {}", format_currency(quote.total_loan_cost));
        if option.terms.buy_down_cost > 0.0 {
            println!("  Monthly savings:   {}", format_currency(quote.monthly_savings));
            println!("  Break-even:        {}", format_break_even(quote.break_even_months));
        }
    }

    // Cheapest total cost wins
    let best = options
        .iter()
        .zip(&quotes)
        .min_by(|a, b| a.1.total_loan_cost.total_cmp(&b.1.total_loan_cost))
        .map(|(option, _)| option.name)
        .unwrap_or("n/a");
    println!("\nLowest total cost: {}", best);

    let csv_path = "loan_comparison.csv";
    let mut file = File::create(csv_path).with_context(|| format!("creating {}", csv_path))?;

    writeln!(
        file,
        "Option,AdjustedRatePct,MonthlyPayment,TotalPayments,TotalInterest,PointsCost,\
         TotalUpfrontCosts,TotalLoanCost,MonthlySavings,BreakEvenMonths"
    )?;
    for (option, quote) in options.iter().zip(&quotes) {
        writeln!(
            file,
            "{},{:.4},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{}",
            option.name,
            quote.adjusted_rate_pct,
            quote.monthly_payment,
            quote.total_payments,
            quote.total_interest,
            quote.points_cost,
            quote.total_upfront_costs,
            quote.total_loan_cost,
            quote.monthly_savings,
            if quote.break_even_months.is_finite() {
                format!("{:.1}", quote.break_even_months)
            } else {
                "never".to_string()
            },
        )?;
    }

    println!("Comparison written to: {}", csv_path);
    Ok(())
}
