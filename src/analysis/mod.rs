//! Deal calculation engines: amortization, MAO, rehab aggregation, and
//! cash flow / returns analysis

pub mod amortization;
pub mod engine;
pub mod mao;
pub mod rehab;
mod results;

pub use amortization::{compute_amortization, monthly_payment, LoanQuote};
pub use engine::{AnalysisConfig, AnalysisEngine};
pub use mao::{compute_mao, compute_mao_table, MaoQuote, OfferRule};
pub use rehab::{aggregate_rehab, RehabTotals};
pub use results::AnalysisResult;
