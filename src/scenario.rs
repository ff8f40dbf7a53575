//! Scenario runner for batch deal analysis
//!
//! Pre-configures the analysis engine once, then runs many deals or many
//! what-if configurations without rebuilding state between calls.

use chrono::{DateTime, Utc};
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisConfig, AnalysisEngine, AnalysisResult};
use crate::deal::PropertyFinancials;

/// Pre-configured runner for batch analysis
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
///
/// // Same deal under several refinance assumptions
/// for ltv in [0.70, 0.75, 0.80] {
///     let config = AnalysisConfig { refinance_ltv: ltv };
///     let result = runner.run_scenarios(&deal, &[config]);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base_config: AnalysisConfig,
}

impl ScenarioRunner {
    /// Create a runner with default configuration
    pub fn new() -> Self {
        Self {
            base_config: AnalysisConfig::default(),
        }
    }

    /// Create a runner with a specific base configuration
    pub fn with_config(config: AnalysisConfig) -> Self {
        Self {
            base_config: config,
        }
    }

    /// Analyze a single deal with the base configuration
    pub fn run(&self, deal: &PropertyFinancials) -> AnalysisResult {
        let engine = AnalysisEngine::new(self.base_config.clone());
        engine.analyze(deal)
    }

    /// Analyze many deals in parallel with the same configuration
    pub fn run_batch(&self, deals: &[PropertyFinancials]) -> Vec<AnalysisResult> {
        debug!("analyzing batch of {} deals", deals.len());
        deals
            .par_iter()
            .map(|deal| {
                let engine = AnalysisEngine::new(self.base_config.clone());
                engine.analyze(deal)
            })
            .collect()
    }

    /// Run several what-if configurations against one deal
    pub fn run_scenarios(
        &self,
        deal: &PropertyFinancials,
        configs: &[AnalysisConfig],
    ) -> Vec<AnalysisResult> {
        configs
            .iter()
            .map(|config| {
                let engine = AnalysisEngine::new(config.clone());
                engine.analyze(deal)
            })
            .collect()
    }

    /// Get reference to the base configuration for inspection
    pub fn config(&self) -> &AnalysisConfig {
        &self.base_config
    }

    /// Get mutable reference to the base configuration for customization
    pub fn config_mut(&mut self) -> &mut AnalysisConfig {
        &mut self.base_config
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// A named what-if snapshot: the inputs as entered plus the results they
/// produced. Storing and listing these records belongs to the caller; the
/// engine only defines the shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedScenario {
    pub name: String,
    pub inputs: PropertyFinancials,
    pub results: AnalysisResult,
    pub created_at: DateTime<Utc>,
}

impl SavedScenario {
    pub fn new(name: impl Into<String>, inputs: PropertyFinancials, results: AnalysisResult) -> Self {
        Self {
            name: name.into(),
            inputs,
            results,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deal::{ExpenseRates, FixedExpenses};

    fn test_deal(purchase_price: f64, monthly_rent: f64) -> PropertyFinancials {
        PropertyFinancials {
            purchase_price,
            arv: purchase_price * 1.25,
            down_payment: purchase_price * 0.2,
            loan_amount: None,
            annual_rate_pct: 6.5,
            term_years: 30,
            rehab_total: 25_000.0,
            closing_costs: 4_000.0,
            holding_days: 60,
            monthly_rent,
            expense_rates: ExpenseRates::default(),
            fixed_expenses: FixedExpenses {
                insurance_annual: 1_200.0,
                taxes_annual: 2_400.0,
                utilities_monthly: 0.0,
                other_monthly: 0.0,
            },
        }
    }

    #[test]
    fn test_batch_matches_single_runs() {
        let runner = ScenarioRunner::new();
        let deals = vec![
            test_deal(150_000.0, 1_500.0),
            test_deal(200_000.0, 2_000.0),
            test_deal(320_000.0, 2_800.0),
        ];

        let batch = runner.run_batch(&deals);
        assert_eq!(batch.len(), 3);

        for (deal, result) in deals.iter().zip(&batch) {
            let single = runner.run(deal);
            assert_eq!(single.monthly_cash_flow, result.monthly_cash_flow);
            assert_eq!(single.cap_rate_pct, result.cap_rate_pct);
        }
    }

    #[test]
    fn test_scenarios_vary_refinance_ltv() {
        let runner = ScenarioRunner::new();
        let deal = test_deal(200_000.0, 2_000.0);

        let configs: Vec<_> = [0.70, 0.75, 0.80]
            .iter()
            .map(|&ltv| AnalysisConfig {
                refinance_ltv: ltv,
            })
            .collect();

        let results = runner.run_scenarios(&deal, &configs);
        assert_eq!(results.len(), 3);

        // Higher refinance LTV frees up more cash
        assert!(results[2].cash_out_at_refi > results[1].cash_out_at_refi);
        assert!(results[1].cash_out_at_refi > results[0].cash_out_at_refi);

        // Everything unrelated to the refinance is untouched
        assert_eq!(results[0].monthly_cash_flow, results[2].monthly_cash_flow);
    }

    #[test]
    fn test_saved_scenario_keeps_inputs_and_results() {
        let runner = ScenarioRunner::new();
        let deal = test_deal(200_000.0, 2_000.0);
        let result = runner.run(&deal);

        let saved = SavedScenario::new("Scenario 1", deal.clone(), result.clone());
        assert_eq!(saved.name, "Scenario 1");
        assert_eq!(saved.inputs.purchase_price, 200_000.0);
        assert_eq!(saved.results.monthly_cash_flow, result.monthly_cash_flow);
    }
}
