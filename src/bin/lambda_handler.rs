//! AWS Lambda handler for deal analysis
//!
//! Accepts deal inputs via JSON and returns the full analysis, the MAO
//! offer table, and an optional compounding projection.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use deal_engine::{
    analysis::{compute_mao_table, AnalysisConfig, AnalysisEngine, AnalysisResult, MaoQuote, OfferRule},
    deal::{ExpenseRates, FixedExpenses, PropertyFinancials},
    projection::{project_compounding, CompoundingSummary, YearSnapshot},
};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};

/// Input for one analysis run
#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub purchase_price: f64,

    #[serde(default)]
    pub arv: f64,

    #[serde(default)]
    pub down_payment: f64,

    /// Explicit loan amount; purchase price minus down payment when absent
    #[serde(default)]
    pub loan_amount: Option<f64>,

    #[serde(default)]
    pub interest_rate: f64,

    /// Loan term in years (default: 30)
    #[serde(default = "default_term_years")]
    pub term_years: u32,

    #[serde(default)]
    pub rehab_total: f64,

    #[serde(default)]
    pub closing_costs: f64,

    #[serde(default)]
    pub holding_days: u32,

    #[serde(default)]
    pub monthly_rent: f64,

    /// Maintenance as percent of rent (default: 8%)
    #[serde(default = "default_maintenance_pct")]
    pub maintenance_pct: f64,

    /// Management as percent of rent (default: 10%)
    #[serde(default = "default_management_pct")]
    pub management_pct: f64,

    /// Vacancy as percent of rent (default: 5%)
    #[serde(default = "default_vacancy_pct")]
    pub vacancy_pct: f64,

    #[serde(default)]
    pub insurance_annual: f64,

    #[serde(default)]
    pub taxes_annual: f64,

    #[serde(default)]
    pub utilities_monthly: f64,

    #[serde(default)]
    pub other_monthly: f64,

    /// Refinance LTV as a fraction of ARV (default: 0.80)
    #[serde(default = "default_refinance_ltv")]
    pub refinance_ltv: f64,

    /// Extra MAO percentage shown next to the standard 70/75/80
    #[serde(default)]
    pub custom_mao_pct: Option<f64>,

    /// Include a compounding projection over this many years
    #[serde(default)]
    pub projection_years: Option<u32>,

    /// Annual appreciation rate for the projection (default: 3%)
    #[serde(default = "default_appreciation_rate")]
    pub appreciation_rate: f64,

    /// Annual rent growth rate for the projection (default: 2%)
    #[serde(default = "default_rent_increase_rate")]
    pub rent_increase_rate: f64,
}

fn default_term_years() -> u32 { 30 }
fn default_maintenance_pct() -> f64 { 8.0 }
fn default_management_pct() -> f64 { 10.0 }
fn default_vacancy_pct() -> f64 { 5.0 }
fn default_refinance_ltv() -> f64 { 0.80 }
fn default_appreciation_rate() -> f64 { 3.0 }
fn default_rent_increase_rate() -> f64 { 2.0 }

/// Output of one analysis run
#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis: AnalysisResult,
    pub mao_table: Vec<MaoQuote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection: Option<ProjectionOutput>,
    pub execution_time_ms: u64,
}

#[derive(Debug, Serialize)]
pub struct ProjectionOutput {
    pub summary: CompoundingSummary,
    pub years: Vec<YearSnapshot>,
}

impl AnalysisRequest {
    fn to_financials(&self) -> PropertyFinancials {
        PropertyFinancials {
            purchase_price: self.purchase_price,
            arv: self.arv,
            down_payment: self.down_payment,
            loan_amount: self.loan_amount,
            annual_rate_pct: self.interest_rate,
            term_years: self.term_years,
            rehab_total: self.rehab_total,
            closing_costs: self.closing_costs,
            holding_days: self.holding_days,
            monthly_rent: self.monthly_rent,
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
        }
    }
}

fn error_response(status: u16, message: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(format!(r#"{{"error":"{}"}}"#, message)))
        .unwrap()
}

fn json_response(body: &AnalysisResponse) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    // Parse request body
    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: AnalysisRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => {
            return Ok(error_response(400, &format!("Invalid JSON: {}", e)));
        }
    };

    let financials = request.to_financials();
    let engine = AnalysisEngine::new(AnalysisConfig {
        refinance_ltv: request.refinance_ltv,
    });
    let analysis = engine.analyze(&financials);

    let mao_table = compute_mao_table(
        financials.arv,
        financials.rehab_total,
        &OfferRule::standard_set(request.custom_mao_pct),
    );

    let projection = request.projection_years.map(|years| {
        let series = project_compounding(
            financials.arv,
            financials.monthly_rent,
            request.appreciation_rate,
            request.rent_increase_rate,
            years,
        );
        ProjectionOutput {
            summary: series.summary(),
            years: series.snapshots,
        }
    });

    let response = AnalysisResponse {
        analysis,
        mao_table,
        projection,
        execution_time_ms: start.elapsed().as_millis() as u64,
    };

    Ok(json_response(&response))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
