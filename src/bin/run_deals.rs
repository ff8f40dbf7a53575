//! Run the analysis engine across the whole deal pipeline
//!
//! Analyzes every deal in data/deals.csv in parallel and writes the
//! per-deal results plus portfolio aggregates.

use anyhow::Context;
use deal_engine::{
    analysis::{AnalysisConfig, AnalysisEngine, AnalysisResult},
    deal::load_default_deals,
    format::{format_currency, format_currency_whole, format_percent},
};
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

/// Portfolio-level aggregates across all analyzed deals
#[derive(Debug, Default)]
struct PortfolioTotals {
    deal_count: usize,
    total_purchase: f64,
    total_invested: f64,
    total_monthly_cash_flow: f64,
    total_annual_cash_flow: f64,
    total_noi: f64,
    total_equity: f64,
    total_refi_cash: f64,
    cash_flow_positive: usize,
}

impl PortfolioTotals {
    fn add(&mut self, result: &AnalysisResult) {
        self.deal_count += 1;
        self.total_purchase += result.purchase_price;
        self.total_invested += result.total_invested;
        self.total_monthly_cash_flow += result.monthly_cash_flow;
        self.total_annual_cash_flow += result.annual_cash_flow;
        self.total_noi += result.noi;
        self.total_equity += result.current_equity;
        self.total_refi_cash += result.cash_out_at_refi;
        if result.is_cash_flow_positive() {
            self.cash_flow_positive += 1;
        }
    }

    /// Purchase-weighted cap rate for the whole portfolio
    fn blended_cap_rate_pct(&self) -> f64 {
        if self.total_purchase > 0.0 {
            self.total_noi / self.total_purchase * 100.0
        } else {
            0.0
        }
    }

    fn blended_cash_on_cash_pct(&self) -> f64 {
        if self.total_invested > 0.0 {
            self.total_annual_cash_flow / self.total_invested * 100.0
        } else {
            0.0
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let start = Instant::now();
    println!("Loading deals from data/deals.csv...");

    let deals = load_default_deals().context("loading deal pipeline")?;
    println!("Loaded {} deals in {:?}", deals.len(), start.elapsed());

    let config = AnalysisConfig::default();

    println!("Analyzing...");
    let analysis_start = Instant::now();

    let results: Vec<AnalysisResult> = deals
        .par_iter()
        .map(|deal| {
            let engine = AnalysisEngine::new(config.clone());
            engine.analyze(&deal.financials)
        })
        .collect();

    println!("Analysis complete in {:?}\n", analysis_start.elapsed());

    println!(
        "{:<6} {:<24} {:>12} {:>12} {:>10} {:>10} {:>12}",
        "Deal", "Address", "Price", "Cash Flow", "Cap Rate", "CoC", "Refi Cash"
    );
    println!("{}", "-".repeat(94));

    let mut totals = PortfolioTotals::default();
    for (deal, result) in deals.iter().zip(&results) {
        totals.add(result);
        println!(
            "{:<6} {:<24} {:>12} {:>12} {:>10} {:>10} {:>12}",
            deal.deal_id,
            deal.address,
            format_currency_whole(result.purchase_price),
            format_currency(result.monthly_cash_flow),
            format_percent(result.cap_rate_pct),
            format_percent(result.cash_on_cash_return_pct),
            format_currency_whole(result.cash_out_at_refi),
        );
    }

    println!("\nPortfolio:");
    println!("  Deals:                {} ({} cash flow positive)",
        totals.deal_count, totals.cash_flow_positive);
    println!("  Total purchase:       {}", format_currency_whole(totals.total_purchase));
    println!("  Total invested:       {}", format_currency_whole(totals.total_invested));
    println!("  Monthly cash flow:    {}", format_currency(totals.total_monthly_cash_flow));
    println!("  Blended cap rate:     {}", format_percent(totals.blended_cap_rate_pct()));
    println!("  Blended CoC:          {}", format_percent(totals.blended_cash_on_cash_pct()));
    println!("  Total equity:         {}", format_currency_whole(totals.total_equity));
    println!("  Refi cash available:  {}", format_currency_whole(totals.total_refi_cash));

    let csv_path = "portfolio_analysis.csv";
    let mut file = File::create(csv_path).with_context(|| format!("creating {}", csv_path))?;

    writeln!(
        file,
        "DealID,Address,PurchasePrice,LoanAmount,MonthlyMortgage,MonthlyCashFlow,\
         AnnualCashFlow,NOI,CapRatePct,CashOnCashPct,TotalInvested,CurrentEquity,CashOutAtRefi"
    )?;
    for (deal, result) in deals.iter().zip(&results) {
        writeln!(
            file,
            "{},{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.4},{:.4},{:.2},{:.2},{:.2}",
            deal.deal_id,
            deal.address,
            result.purchase_price,
            result.loan_amount,
            result.monthly_mortgage,
            result.monthly_cash_flow,
            result.annual_cash_flow,
            result.noi,
            result.cap_rate_pct,
            result.cash_on_cash_return_pct,
            result.total_invested,
            result.current_equity,
            result.cash_out_at_refi,
        )?;
    }

    println!("\nFull results written to: {}", csv_path);
    Ok(())
}
