//! Load deals from a pipeline CSV export

use super::{Deal, ExpenseRates, FixedExpenses, PropertyFinancials};
use csv::Reader;
use log::info;
use std::path::Path;
use thiserror::Error;

/// Default location of the deal pipeline export
pub const DEFAULT_DEALS_PATH: &str = "data/deals.csv";

#[derive(Debug, Error)]
pub enum DealLoadError {
    #[error("failed to read deals CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("deal {deal_id}: {field} must be non-negative, got {value}")]
    NegativeField {
        deal_id: u32,
        field: &'static str,
        value: f64,
    },

    #[error("deal {deal_id}: term must be at least 1 year")]
    ZeroTerm { deal_id: u32 },
}

/// Raw CSV row matching the pipeline export columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "DealID")]
    deal_id: u32,
    #[serde(rename = "Address")]
    address: String,
    #[serde(rename = "PurchasePrice")]
    purchase_price: f64,
    #[serde(rename = "ARV")]
    arv: f64,
    #[serde(rename = "DownPayment")]
    down_payment: f64,
    #[serde(rename = "LoanAmount")]
    loan_amount: Option<f64>,
    #[serde(rename = "InterestRate")]
    annual_rate_pct: f64,
    #[serde(rename = "TermYears")]
    term_years: u32,
    #[serde(rename = "RehabTotal")]
    rehab_total: f64,
    #[serde(rename = "ClosingCosts")]
    closing_costs: f64,
    #[serde(rename = "HoldingDays")]
    holding_days: u32,
    #[serde(rename = "MonthlyRent")]
    monthly_rent: f64,
    #[serde(rename = "MaintenancePct")]
    maintenance_pct: f64,
    #[serde(rename = "ManagementPct")]
    management_pct: f64,
    #[serde(rename = "VacancyPct")]
    vacancy_pct: f64,
    #[serde(rename = "InsuranceAnnual")]
    insurance_annual: f64,
    #[serde(rename = "TaxesAnnual")]
    taxes_annual: f64,
    #[serde(rename = "UtilitiesMonthly")]
    utilities_monthly: f64,
    #[serde(rename = "OtherMonthly")]
    other_monthly: f64,
}

impl CsvRow {
    /// The engines accept any well-typed number, so sanity rejection of
    /// negative amounts happens here at the import boundary.
    fn to_deal(self) -> Result<Deal, DealLoadError> {
        let non_negative = |field: &'static str, value: f64| {
            if value < 0.0 {
                Err(DealLoadError::NegativeField {
                    deal_id: self.deal_id,
                    field,
                    value,
                })
            } else {
                Ok(value)
            }
        };

        let purchase_price = non_negative("PurchasePrice", self.purchase_price)?;
        let arv = non_negative("ARV", self.arv)?;
        let down_payment = non_negative("DownPayment", self.down_payment)?;
        let annual_rate_pct = non_negative("InterestRate", self.annual_rate_pct)?;
        let rehab_total = non_negative("RehabTotal", self.rehab_total)?;
        let closing_costs = non_negative("ClosingCosts", self.closing_costs)?;
        let monthly_rent = non_negative("MonthlyRent", self.monthly_rent)?;

        if let Some(loan) = self.loan_amount {
            non_negative("LoanAmount", loan)?;
        }
        if self.term_years == 0 {
            return Err(DealLoadError::ZeroTerm {
                deal_id: self.deal_id,
            });
        }

        Ok(Deal {
            deal_id: self.deal_id,
            address: self.address,
            financials: PropertyFinancials {
                purchase_price,
                arv,
                down_payment,
                loan_amount: self.loan_amount,
                annual_rate_pct,
                term_years: self.term_years,
                rehab_total,
                closing_costs,
                holding_days: self.holding_days,
                monthly_rent,
                expense_rates: ExpenseRates {
                    maintenance_pct: self.maintenance_pct,
                    management_pct: self.management_pct,
                    vacancy_pct: self.vacancy_pct,
                },
                fixed_expenses: FixedExpenses {
                    insurance_annual: self.insurance_annual,
                    taxes_annual: self.taxes_annual,
                    utilities_monthly: self.utilities_monthly,
                    other_monthly: self.other_monthly,
                },
            },
        })
    }
}

/// Load deals from a CSV file
pub fn load_deals(path: &Path) -> Result<Vec<Deal>, DealLoadError> {
    let mut reader = Reader::from_path(path)?;
    let mut deals = Vec::new();

    for row in reader.deserialize::<CsvRow>() {
        deals.push(row?.to_deal()?);
    }

    info!("loaded {} deals from {}", deals.len(), path.display());
    Ok(deals)
}

/// Load deals from the default pipeline export location
pub fn load_default_deals() -> Result<Vec<Deal>, DealLoadError> {
    load_deals(Path::new(DEFAULT_DEALS_PATH))
}
