//! Deal input value objects shared by every calculator
//!
//! All of these are plain immutable inputs. Engines never mutate them and
//! never validate business sanity: a negative MAO or cash flow is a valid
//! economic signal for the caller to present.

use serde::{Deserialize, Serialize};

/// Terms for a single fixed-rate loan option
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount borrowed
    pub principal: f64,

    /// Note rate before any buy-down, in percent (6.5 = 6.5%)
    pub annual_rate_pct: f64,

    /// Term in years
    pub term_years: u32,

    /// Discount points charged at closing, in percent of principal
    pub points_pct: f64,

    /// Flat lender/closing fees
    pub fees: f64,

    /// Rate reduction purchased up front, in percent
    /// (the adjusted rate floors at 0, never negative)
    pub rate_buy_down_pct: f64,

    /// One-time cost of the rate buy-down
    pub buy_down_cost: f64,
}

impl LoanTerms {
    /// A plain loan with no points, fees, or buy-down
    pub fn simple(principal: f64, annual_rate_pct: f64, term_years: u32) -> Self {
        Self {
            principal,
            annual_rate_pct,
            term_years,
            points_pct: 0.0,
            fees: 0.0,
            rate_buy_down_pct: 0.0,
            buy_down_cost: 0.0,
        }
    }
}

/// Operating expense rates applied to monthly rent, in percent
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExpenseRates {
    pub maintenance_pct: f64,
    pub management_pct: f64,
    pub vacancy_pct: f64,
}

impl Default for ExpenseRates {
    /// Common underwriting defaults: 8% maintenance, 10% management,
    /// 5% vacancy
    fn default() -> Self {
        Self {
            maintenance_pct: 8.0,
            management_pct: 10.0,
            vacancy_pct: 5.0,
        }
    }
}

/// Fixed (non-rent-linked) operating expenses
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FixedExpenses {
    /// Annual insurance premium
    pub insurance_annual: f64,

    /// Annual property taxes
    pub taxes_annual: f64,

    /// Monthly utilities paid by the owner
    pub utilities_monthly: f64,

    /// Any other monthly expense (HOA, lawn care, ...)
    pub other_monthly: f64,
}

/// Complete financial picture of one deal, the input to the cash flow
/// and returns engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyFinancials {
    pub purchase_price: f64,

    /// After-repair value
    pub arv: f64,

    pub down_payment: f64,

    /// Explicit loan amount; falls back to `purchase_price - down_payment`
    /// when absent
    pub loan_amount: Option<f64>,

    /// Note rate in percent
    pub annual_rate_pct: f64,

    /// Loan term in years
    pub term_years: u32,

    /// Total rehab budget (typically the rehab aggregator's output)
    pub rehab_total: f64,

    /// Closing costs paid at purchase, additive with points and fees
    pub closing_costs: f64,

    /// Days the property is held before it rents (rehab + lease-up)
    pub holding_days: u32,

    pub monthly_rent: f64,

    pub expense_rates: ExpenseRates,

    pub fixed_expenses: FixedExpenses,
}

/// One line of an itemized rehab estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RehabLineItem {
    /// Work category. Empty or whitespace-only names mark draft rows that
    /// are excluded from totals.
    pub name: String,

    /// Typical cost for this category
    pub typical_cost: f64,

    /// User override; falls back to `typical_cost` when absent
    pub user_cost: Option<f64>,

    /// Unit count (floors at 1 when aggregating)
    pub quantity: u32,

    /// Short description of the work covered
    pub note: String,
}

impl RehabLineItem {
    pub fn new(name: impl Into<String>, typical_cost: f64, note: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            typical_cost,
            user_cost: None,
            quantity: 1,
            note: note.into(),
        }
    }

    /// Effective per-unit cost for this line
    pub fn cost(&self) -> f64 {
        self.user_cost.unwrap_or(self.typical_cost)
    }
}

/// How the rehab figure is supplied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RehabScope {
    /// Single lump-sum figure
    Total(f64),
    /// Itemized breakdown
    LineItems(Vec<RehabLineItem>),
}

/// A rehab estimate ready for aggregation. City templates are supplied by
/// the caller as a pre-populated estimate; the engine knows nothing about
/// template storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RehabEstimate {
    pub scope: RehabScope,

    /// Buffer for unexpected costs, in percent of the subtotal
    pub contingency_pct: f64,
}

impl RehabEstimate {
    pub fn lump_sum(total: f64, contingency_pct: f64) -> Self {
        Self {
            scope: RehabScope::Total(total),
            contingency_pct,
        }
    }

    pub fn itemized(items: Vec<RehabLineItem>, contingency_pct: f64) -> Self {
        Self {
            scope: RehabScope::LineItems(items),
            contingency_pct,
        }
    }

    /// The standard single-family line-item template with a 10%
    /// contingency, the usual starting point before city adjustments.
    pub fn standard_template() -> Self {
        Self::itemized(
            vec![
                RehabLineItem::new("Kitchen", 15_000.0, "Cabinets, countertops, appliances"),
                RehabLineItem::new("Bathrooms", 8_000.0, "Per bathroom renovation"),
                RehabLineItem::new("Flooring", 5_000.0, "Hardwood, tile, carpet"),
                RehabLineItem::new("Paint (Interior)", 3_000.0, "All interior walls and trim"),
                RehabLineItem::new("Paint (Exterior)", 4_000.0, "Siding, trim, doors"),
                RehabLineItem::new("Roof", 12_000.0, "Full roof replacement"),
                RehabLineItem::new("HVAC", 6_000.0, "Heating and cooling system"),
                RehabLineItem::new("Electrical", 4_000.0, "Wiring, outlets, fixtures"),
                RehabLineItem::new("Plumbing", 3_500.0, "Pipes, fixtures, water heater"),
                RehabLineItem::new("Windows", 8_000.0, "Window replacement"),
                RehabLineItem::new("Landscaping", 2_500.0, "Yard cleanup and basic landscaping"),
                RehabLineItem::new("Permits", 1_500.0, "Building permits and inspections"),
            ],
            10.0,
        )
    }
}

/// An identified property plus its financials, the unit of CSV import
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deal {
    pub deal_id: u32,
    pub address: String,
    pub financials: PropertyFinancials,
}

/// Coerce a raw form value to a number. Empty, unparseable, or non-finite
/// input becomes 0; leading `$` and thousands separators are tolerated.
pub fn parse_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Same coercion for percent fields, tolerating a trailing `%`
pub fn parse_percent(raw: &str) -> f64 {
    parse_amount(raw.trim().trim_end_matches('%'))
}
