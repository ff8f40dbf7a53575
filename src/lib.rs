//! Deal Engine - Investment analysis for BRRRR-style real estate workflows
//!
//! This library provides:
//! - Fixed-rate amortization with rate buy-down break-even analysis
//! - Maximum allowable offer (MAO) tables under ARV percentage rules
//! - Rehab estimate aggregation (lump-sum or itemized, with contingency)
//! - Cash flow, NOI, cap rate, and cash-on-cash returns analysis
//! - Long-horizon compounding and freedom-number projections

pub mod analysis;
pub mod deal;
pub mod format;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use analysis::{
    aggregate_rehab, compute_amortization, compute_mao, compute_mao_table, AnalysisConfig,
    AnalysisEngine, AnalysisResult, LoanQuote, MaoQuote, OfferRule, RehabTotals,
};
pub use deal::{Deal, LoanTerms, PropertyFinancials, RehabEstimate};
pub use projection::{project_compounding, project_freedom, FreedomPlan, ProjectionSeries};
pub use scenario::{SavedScenario, ScenarioRunner};
