//! Percent-based settings as stored by the user-facing settings page
//!
//! Users enter rates as percentages (20 = 20%). The engine works with
//! decimals, so every rate field is divided by 100 on the way in.

use serde::{Deserialize, Serialize};
use super::{default_settings, CashflowSettings};

/// Persisted settings shape. Missing keys take the default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPercentages {
    pub down_payment: f64,
    pub interest_rate: f64,
    pub loan_term: u32,
    pub property_tax: f64,
    pub insurance: f64,
    pub maintenance: f64,
    pub management_fee: f64,
    pub vacancy_rate: f64,
    pub hoa_fee: f64,
    pub other_costs: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_income: Option<f64>,
}

impl Default for SettingsPercentages {
    fn default() -> Self {
        Self::from_settings(&default_settings())
    }
}

impl SettingsPercentages {
    /// Convert to engine settings (percent rates become decimals)
    pub fn to_settings(&self) -> CashflowSettings {
        CashflowSettings {
            down_payment: self.down_payment / 100.0,
            interest_rate: self.interest_rate / 100.0,
            loan_term: self.loan_term,
            property_tax: self.property_tax / 100.0,
            insurance: self.insurance / 100.0,
            maintenance: self.maintenance / 100.0,
            management_fee: self.management_fee / 100.0,
            vacancy_rate: self.vacancy_rate / 100.0,
            hoa_fee: self.hoa_fee,
            other_costs: self.other_costs,
            custom_income: self.custom_income,
        }
    }

    /// Express engine settings as percentages for storage or display
    pub fn from_settings(settings: &CashflowSettings) -> Self {
        Self {
            down_payment: settings.down_payment * 100.0,
            interest_rate: settings.interest_rate * 100.0,
            loan_term: settings.loan_term,
            property_tax: settings.property_tax * 100.0,
            insurance: settings.insurance * 100.0,
            maintenance: settings.maintenance * 100.0,
            management_fee: settings.management_fee * 100.0,
            vacancy_rate: settings.vacancy_rate * 100.0,
            hoa_fee: settings.hoa_fee,
            other_costs: settings.other_costs,
            custom_income: settings.custom_income,
        }
    }
}
