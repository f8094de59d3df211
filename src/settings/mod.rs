//! Financing and operating assumptions for a cashflow calculation

mod percent;
pub mod store;

pub use percent::SettingsPercentages;
pub use store::{SettingsRepository, InMemorySettingsStore, JsonFileSettingsStore};

use serde::{Deserialize, Serialize};
use crate::error::{CashflowError, Result};

/// Monthly rent as a fraction of purchase price, used when no rent is known
pub const DEFAULT_RENT_TO_PRICE_RATIO: f64 = 0.008;

/// Rule-of-thumb monthly rent for a property with no rent data
pub fn estimate_rent(purchase_price: f64) -> f64 {
    purchase_price * DEFAULT_RENT_TO_PRICE_RATIO
}

/// Assumptions applied to a listing. Rates are decimals (0.2 = 20%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashflowSettings {
    /// Fraction of price paid upfront
    pub down_payment: f64,

    /// Nominal annual mortgage rate
    pub interest_rate: f64,

    /// Amortization period in years
    pub loan_term: u32,

    /// Annual tax rate applied to price
    pub property_tax: f64,

    /// Annual insurance rate applied to price
    pub insurance: f64,

    /// Annual maintenance rate applied to price
    pub maintenance: f64,

    /// Fraction of monthly rent paid to a manager
    pub management_fee: f64,

    /// Fraction of monthly rent lost to vacancy
    pub vacancy_rate: f64,

    /// Monthly HOA dues
    pub hoa_fee: f64,

    /// Annual flat costs, spread evenly over twelve months
    pub other_costs: f64,

    /// Monthly income that overrides listing or estimated rent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_income: Option<f64>,
}

/// Industry rule-of-thumb defaults. Each call returns a fresh value.
pub fn default_settings() -> CashflowSettings {
    CashflowSettings {
        down_payment: 0.20,
        interest_rate: 0.06,
        loan_term: 30,
        property_tax: 0.015,
        insurance: 0.005,
        maintenance: 0.01,
        management_fee: 0.0,
        vacancy_rate: 0.05,
        hoa_fee: 0.0,
        other_costs: 0.0,
        custom_income: None,
    }
}

impl Default for CashflowSettings {
    fn default() -> Self {
        default_settings()
    }
}

impl CashflowSettings {
    /// Check that the settings describe a sensible loan and expense model.
    ///
    /// The engine accepts anything; this is for values coming from files
    /// or the command line.
    pub fn validate(&self) -> Result<()> {
        let fractions = [
            ("down_payment", self.down_payment),
            ("management_fee", self.management_fee),
            ("vacancy_rate", self.vacancy_rate),
        ];
        for (field, value) in fractions {
            check_finite(field, value)?;
            if !(0.0..=1.0).contains(&value) {
                return Err(CashflowError::invalid_setting(field, value, "must be between 0 and 1"));
            }
        }

        let non_negative = [
            ("interest_rate", self.interest_rate),
            ("property_tax", self.property_tax),
            ("insurance", self.insurance),
            ("maintenance", self.maintenance),
            ("hoa_fee", self.hoa_fee),
            ("other_costs", self.other_costs),
        ];
        for (field, value) in non_negative {
            check_finite(field, value)?;
            if value < 0.0 {
                return Err(CashflowError::invalid_setting(field, value, "must not be negative"));
            }
        }

        if let Some(income) = self.custom_income {
            check_finite("custom_income", income)?;
            if income < 0.0 {
                return Err(CashflowError::invalid_setting("custom_income", income, "must not be negative"));
            }
        }

        if self.loan_term == 0 {
            return Err(CashflowError::invalid_setting("loan_term", 0.0, "must be at least one year"));
        }

        Ok(())
    }

    /// Number of monthly payments over the loan term
    pub fn loan_months(&self) -> u32 {
        self.loan_term.saturating_mul(12)
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CashflowError::invalid_setting(field, value, "must be a finite number"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let s = default_settings();
        assert_eq!(s.down_payment, 0.20);
        assert_eq!(s.interest_rate, 0.06);
        assert_eq!(s.loan_term, 30);
        assert_eq!(s.property_tax, 0.015);
        assert_eq!(s.insurance, 0.005);
        assert_eq!(s.maintenance, 0.01);
        assert_eq!(s.management_fee, 0.0);
        assert_eq!(s.vacancy_rate, 0.05);
        assert_eq!(s.hoa_fee, 0.0);
        assert_eq!(s.other_costs, 0.0);
        assert_eq!(s.custom_income, None);
        assert_eq!(s.loan_months(), 360);
    }

    #[test]
    fn test_defaults_are_independent_copies() {
        let mut a = default_settings();
        a.interest_rate = 0.09;
        a.hoa_fee = 250.0;

        let b = default_settings();
        assert_eq!(b.interest_rate, 0.06);
        assert_eq!(b.hoa_fee, 0.0);
        assert_eq!(b, CashflowSettings::default());
    }

    #[test]
    fn test_estimate_rent() {
        assert!((estimate_rent(300_000.0) - 2_400.0).abs() < 1e-9);
        assert_eq!(estimate_rent(0.0), 0.0);
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(default_settings().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut s = default_settings();
        s.down_payment = 1.2;
        assert!(matches!(
            s.validate(),
            Err(CashflowError::InvalidSetting { field: "down_payment", .. })
        ));

        let mut s = default_settings();
        s.interest_rate = f64::NAN;
        assert!(matches!(
            s.validate(),
            Err(CashflowError::InvalidSetting { field: "interest_rate", .. })
        ));

        let mut s = default_settings();
        s.hoa_fee = -10.0;
        assert!(s.validate().is_err());

        let mut s = default_settings();
        s.loan_term = 0;
        assert!(matches!(
            s.validate(),
            Err(CashflowError::InvalidSetting { field: "loan_term", .. })
        ));

        let mut s = default_settings();
        s.custom_income = Some(f64::INFINITY);
        assert!(s.validate().is_err());
    }
}
