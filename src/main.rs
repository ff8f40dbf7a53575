//! Deal Engine CLI
//!
//! Analyzes deals from a pipeline CSV (or a built-in sample deal), prints
//! the monthly breakdown and offer table, and writes results to CSV.

use anyhow::Context;
use clap::Parser;
use deal_engine::{
    analysis::{aggregate_rehab, compute_mao_table, AnalysisConfig, AnalysisEngine, OfferRule},
    deal::{
        load_deals, parse_percent, Deal, ExpenseRates, FixedExpenses, PropertyFinancials,
        RehabEstimate,
    },
    format::{format_currency, format_currency_whole, format_percent},
    projection::{project_compounding, project_freedom, FreedomGoal},
};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "deal-engine", version, about = "Real estate investment analysis")]
struct Args {
    /// Deal pipeline CSV; analyzes a built-in sample deal when omitted
    #[arg(long)]
    deals: Option<PathBuf>,

    /// Horizon in years for the compounding projection
    #[arg(long, default_value_t = 30)]
    years: u32,

    /// Annual appreciation rate in percent
    #[arg(long, default_value_t = 3.0)]
    appreciation: f64,

    /// Annual rent growth rate in percent
    #[arg(long, default_value_t = 2.0)]
    rent_growth: f64,

    /// Refinance LTV as a fraction of ARV
    #[arg(long, default_value_t = 0.80)]
    refinance_ltv: f64,

    /// Extra MAO percentage next to the standard 70/75/80 ("65" or "65%")
    #[arg(long)]
    custom_mao: Option<String>,

    /// Monthly income goal for the freedom plan
    #[arg(long, default_value_t = 10_000.0)]
    target_income: f64,

    /// Properties acquired per year for the freedom plan
    #[arg(long, default_value_t = 2.0)]
    acquisitions_per_year: f64,

    /// Output CSV path
    #[arg(long, default_value = "analysis_output.csv")]
    output: PathBuf,
}

fn sample_deal() -> Deal {
    Deal {
        deal_id: 1,
        address: "123 Elm St".to_string(),
        financials: PropertyFinancials {
            purchase_price: 200_000.0,
            arv: 250_000.0,
            down_payment: 40_000.0,
            loan_amount: None,
            annual_rate_pct: 6.5,
            term_years: 30,
            rehab_total: 30_000.0,
            closing_costs: 5_000.0,
            holding_days: 90,
            monthly_rent: 2_000.0,
            expense_rates: ExpenseRates::default(),
            fixed_expenses: FixedExpenses {
                insurance_annual: 1_200.0,
                taxes_annual: 3_000.0,
                utilities_monthly: 0.0,
                other_monthly: 100.0,
            },
        },
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Deal Engine v0.1.0");
    println!("==================\n");

    let deals = match &args.deals {
        Some(path) => {
            load_deals(path).with_context(|| format!("loading deals from {}", path.display()))?
        }
        None => vec![sample_deal()],
    };
    if deals.is_empty() {
        anyhow::bail!("no deals to analyze");
    }

    let engine = AnalysisEngine::new(AnalysisConfig {
        refinance_ltv: args.refinance_ltv,
    });

    // Per-deal metrics table
    println!(
        "{:<24} {:>12} {:>12} {:>10} {:>10} {:>12} {:>12}",
        "Address", "Price", "Cash Flow", "Cap Rate", "CoC", "Equity", "Refi Cash"
    );
    println!("{}", "-".repeat(100));

    let results: Vec<_> = deals.iter().map(|d| engine.analyze(&d.financials)).collect();
    for (deal, result) in deals.iter().zip(&results) {
        println!(
            "{:<24} {:>12} {:>12} {:>10} {:>10} {:>12} {:>12}",
            deal.address,
            format_currency_whole(result.purchase_price),
            format_currency(result.monthly_cash_flow),
            format_percent(result.cap_rate_pct),
            format_percent(result.cash_on_cash_return_pct),
            format_currency_whole(result.current_equity),
            format_currency_whole(result.cash_out_at_refi),
        );
    }

    // Detail for the first deal
    let deal = &deals[0];
    let result = &results[0];

    println!("\nMonthly breakdown for {}:", deal.address);
    println!("  Rent:            {:>12}", format_currency(result.monthly_rent));
    println!("  Mortgage:       -{:>12}", format_currency(result.monthly_mortgage));
    println!("  Taxes:          -{:>12}", format_currency(result.monthly_taxes));
    println!("  Insurance:      -{:>12}", format_currency(result.monthly_insurance));
    println!("  Maintenance:    -{:>12}", format_currency(result.maintenance_amount));
    println!("  Management:     -{:>12}", format_currency(result.management_amount));
    println!("  Vacancy:        -{:>12}", format_currency(result.vacancy_amount));
    if result.monthly_utilities > 0.0 {
        println!("  Utilities:      -{:>12}", format_currency(result.monthly_utilities));
    }
    if result.other_expenses > 0.0 {
        println!("  Other:          -{:>12}", format_currency(result.other_expenses));
    }
    println!("  Net cash flow:   {:>12}", format_currency(result.monthly_cash_flow));
    println!("  NOI (annual):    {:>12}", format_currency(result.noi));
    println!("  Total invested:  {:>12}", format_currency(result.total_invested));

    // Offer ceiling at the standard ARV percentages
    println!("\nMAO table (ARV {}, rehab {}):",
        format_currency_whole(deal.financials.arv),
        format_currency_whole(deal.financials.rehab_total));
    let custom_pct = args.custom_mao.as_deref().map(parse_percent);
    let table = compute_mao_table(
        deal.financials.arv,
        deal.financials.rehab_total,
        &OfferRule::standard_set(custom_pct),
    );
    for quote in &table {
        println!(
            "  {:>5}%  {:>12}",
            quote.percentage,
            format_currency_whole(quote.mao)
        );
    }

    // Standard rehab template as a budgeting reference
    let template_totals = aggregate_rehab(&RehabEstimate::standard_template());
    println!(
        "\nStandard rehab template: {} + {} contingency = {}",
        format_currency_whole(template_totals.subtotal),
        format_currency_whole(template_totals.contingency_amount),
        format_currency_whole(template_totals.total),
    );

    // Long-horizon projection for the first deal
    let series = project_compounding(
        deal.financials.arv,
        deal.financials.monthly_rent,
        args.appreciation,
        args.rent_growth,
        args.years,
    );

    println!("\nProjection ({} years, {}% appreciation, {}% rent growth):",
        args.years, args.appreciation, args.rent_growth);
    println!(
        "{:>5} {:>14} {:>12} {:>16} {:>16}",
        "Year", "Value", "Rent", "Rent Collected", "Total Return"
    );
    for snapshot in series.snapshots.iter().take(11) {
        println!(
            "{:>5} {:>14} {:>12} {:>16} {:>16}",
            snapshot.year,
            format_currency_whole(snapshot.property_value),
            format_currency_whole(snapshot.monthly_rent),
            format_currency_whole(snapshot.cumulative_rent),
            format_currency_whole(snapshot.total_return),
        );
    }
    if series.snapshots.len() > 11 {
        println!("... ({} more years)", series.snapshots.len() - 11);
    }

    let summary = series.summary();
    println!("\nSummary:");
    println!("  Final value:         {}", format_currency_whole(summary.final_value));
    println!("  Total appreciation:  {} ({})",
        format_currency_whole(summary.total_appreciation),
        format_percent(summary.appreciation_pct));
    println!("  Rent collected:      {}", format_currency_whole(summary.total_rent_collected));
    println!("  Total return:        {} ({})",
        format_currency_whole(summary.total_return),
        format_percent(summary.total_return_pct));

    // Freedom plan using the average cash flow across the analyzed deals
    let avg_cash_flow =
        results.iter().map(|r| r.monthly_cash_flow).sum::<f64>() / results.len() as f64;
    let goal = FreedomGoal {
        desired_monthly_income: args.target_income,
        avg_cash_flow_per_property: avg_cash_flow,
        current_properties: 0,
        acquisition_rate_per_year: args.acquisitions_per_year,
    };

    println!(
        "\nFreedom plan ({} goal at {} avg cash flow per property):",
        format_currency_whole(args.target_income),
        format_currency(avg_cash_flow),
    );
    match project_freedom(&goal) {
        Some(plan) => {
            println!("  Properties needed: {}", plan.properties_needed);
            if plan.years_to_freedom.is_finite() {
                println!("  Years to freedom:  {}", plan.years_to_freedom);
            } else {
                println!("  Years to freedom:  never at the current pace");
            }
        }
        None => {
            println!("  No plan: deals like these do not cash flow, so no portfolio size reaches the goal");
        }
    }

    // Full per-deal results to CSV
    let mut file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;

    writeln!(
        file,
        "DealID,Address,PurchasePrice,LoanAmount,MonthlyMortgage,TotalMonthlyExpenses,\
         MonthlyCashFlow,AnnualCashFlow,NOI,CapRatePct,CashOnCashPct,TotalInvested,\
         LtvPct,CurrentEquity,CashOutAtRefi"
    )?;
    for (deal, result) in deals.iter().zip(&results) {
        writeln!(
            file,
            "{},{},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.2},{:.4},{:.4},{:.2},{:.4},{:.2},{:.2}",
            deal.deal_id,
            deal.address,
            result.purchase_price,
            result.loan_amount,
            result.monthly_mortgage,
            result.total_monthly_expenses,
            result.monthly_cash_flow,
            result.annual_cash_flow,
            result.noi,
            result.cap_rate_pct,
            result.cash_on_cash_return_pct,
            result.total_invested,
            result.ltv_pct,
            result.current_equity,
            result.cash_out_at_refi,
        )?;
    }

    println!("\nFull results written to: {}", args.output.display());
    Ok(())
}
