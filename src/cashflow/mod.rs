//! Cashflow engine and its output records

mod engine;
mod result;
pub mod format;
pub mod output;

pub use engine::{calculate_cashflow, CashflowEngine};
pub use result::{CashflowResult, CashflowSign, CashflowSummary, PropertyAnalysis};
pub use format::{format_currency, format_percent};
pub use output::{write_analyses, write_analyses_to_path};
