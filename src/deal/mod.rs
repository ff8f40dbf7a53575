//! Deal inputs: value objects, boundary coercion, and CSV import

mod data;
pub mod loader;

pub use data::{
    parse_amount, parse_percent, Deal, ExpenseRates, FixedExpenses, LoanTerms, PropertyFinancials,
    RehabEstimate, RehabLineItem, RehabScope,
};
pub use loader::{load_deals, load_default_deals, DealLoadError};
