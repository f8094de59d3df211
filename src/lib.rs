//! RealEst Cashflow - rental property cashflow estimates for listings
//!
//! This library provides:
//! - A pure cashflow engine (mortgage amortization, operating expenses, NOI)
//! - Default financing assumptions and the rent rule of thumb
//! - Percent-based settings persistence behind a repository trait
//! - Listing records, rent/HOA resolution and CSV listing loading
//! - Batch and sensitivity scenario runs

pub mod error;
pub mod settings;
pub mod property;
pub mod cashflow;
pub mod scenario;

// Re-export commonly used types
pub use error::{CashflowError, Result};
pub use settings::{CashflowSettings, default_settings, estimate_rent, SettingsRepository};
pub use property::{PropertyData, RentSource, ListingSite};
pub use cashflow::{calculate_cashflow, CashflowEngine, CashflowResult, PropertyAnalysis};
pub use scenario::ScenarioRunner;
