//! Scenario runner for batch analyses and sensitivity sweeps
//!
//! Holds the base settings once, then runs many listings or many variations
//! of a single setting without reloading configuration.

use crate::cashflow::{CashflowEngine, CashflowResult, PropertyAnalysis};
use crate::property::PropertyData;
use crate::settings::{default_settings, CashflowSettings, SettingsRepository};
use crate::error::Result;

/// One point of a sensitivity sweep
#[derive(Debug, Clone, PartialEq)]
pub struct SensitivityPoint {
    /// Value substituted for the varied setting
    pub value: f64,
    pub result: CashflowResult,
}

/// Pre-loaded scenario runner
///
/// # Example
/// ```
/// use realest_cashflow::{PropertyData, ScenarioRunner};
///
/// let runner = ScenarioRunner::new();
/// let listing = PropertyData::new("zillow_1", 300_000.0).with_rent(2_500.0);
/// let sweep = runner.interest_rate_sensitivity(&listing, &[0.05, 0.06, 0.07]);
/// assert!(sweep[2].result.monthly_payment > sweep[0].result.monthly_payment);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base_settings: CashflowSettings,
}

impl ScenarioRunner {
    /// Create runner with default settings
    pub fn new() -> Self {
        Self {
            base_settings: default_settings(),
        }
    }

    /// Create runner from whatever a settings repository currently holds
    pub fn from_repository(repository: &dyn SettingsRepository) -> Result<Self> {
        Ok(Self {
            base_settings: repository.load()?,
        })
    }

    pub fn with_settings(settings: CashflowSettings) -> Self {
        Self {
            base_settings: settings,
        }
    }

    /// Calculate with an explicit rent
    pub fn run(&self, purchase_price: f64, gross_monthly_rent: f64) -> CashflowResult {
        self.engine().calculate(purchase_price, gross_monthly_rent)
    }

    pub fn run_property(&self, property: &PropertyData) -> PropertyAnalysis {
        self.engine().analyze(property)
    }

    /// Analyze many listings with the same settings
    pub fn run_batch(&self, properties: &[PropertyData]) -> Vec<PropertyAnalysis> {
        let engine = self.engine();
        properties.iter().map(|p| engine.analyze(p)).collect()
    }

    /// Re-run a listing at each annual interest rate
    pub fn interest_rate_sensitivity(&self, property: &PropertyData, rates: &[f64]) -> Vec<SensitivityPoint> {
        self.sweep(property, rates, |settings, rate| settings.interest_rate = rate)
    }

    /// Re-run a listing at each down payment fraction
    pub fn down_payment_sensitivity(&self, property: &PropertyData, fractions: &[f64]) -> Vec<SensitivityPoint> {
        self.sweep(property, fractions, |settings, fraction| settings.down_payment = fraction)
    }

    fn sweep<F>(&self, property: &PropertyData, values: &[f64], apply: F) -> Vec<SensitivityPoint>
    where
        F: Fn(&mut CashflowSettings, f64),
    {
        values
            .iter()
            .map(|&value| {
                let mut settings = self.base_settings.clone();
                apply(&mut settings, value);
                SensitivityPoint {
                    value,
                    result: CashflowEngine::new(settings).analyze(property).result,
                }
            })
            .collect()
    }

    fn engine(&self) -> CashflowEngine {
        CashflowEngine::new(self.base_settings.clone())
    }

    pub fn settings(&self) -> &CashflowSettings {
        &self.base_settings
    }

    pub fn settings_mut(&mut self) -> &mut CashflowSettings {
        &mut self.base_settings
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::RentSource;
    use crate::settings::InMemorySettingsStore;

    fn listing() -> PropertyData {
        PropertyData::new("redfin_7", 320_000.0).with_rent(2_600.0)
    }

    #[test]
    fn test_run_batch() {
        let runner = ScenarioRunner::new();
        let props = vec![
            listing(),
            PropertyData::new("zillow_8", 180_000.0),
            PropertyData::new("zillow_9", 95_000.0).with_rent(1_100.0).with_hoa(40.0),
        ];

        let results = runner.run_batch(&props);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].rent_source, RentSource::Listing);
        assert_eq!(results[1].rent_source, RentSource::Estimated);
        assert_eq!(results[2].result.hoa_fee, 40.0);
        assert_eq!(results[2].listing_id, "zillow_9");
    }

    #[test]
    fn test_interest_rate_sensitivity() {
        let runner = ScenarioRunner::new();
        let sweep = runner.interest_rate_sensitivity(&listing(), &[0.04, 0.06, 0.08]);

        assert_eq!(sweep.len(), 3);
        assert_eq!(sweep[1].value, 0.06);
        assert!(sweep[0].result.monthly_payment < sweep[1].result.monthly_payment);
        assert!(sweep[1].result.monthly_payment < sweep[2].result.monthly_payment);
        assert!(sweep[0].result.net_operating_income > sweep[2].result.net_operating_income);

        // Base settings are not changed by a sweep
        assert_eq!(runner.settings().interest_rate, 0.06);
    }

    #[test]
    fn test_down_payment_sensitivity() {
        let runner = ScenarioRunner::new();
        let sweep = runner.down_payment_sensitivity(&listing(), &[0.1, 0.2, 1.0]);

        assert!(sweep[0].result.loan_amount > sweep[1].result.loan_amount);
        assert_eq!(sweep[2].result.loan_amount, 0.0);
        assert_eq!(sweep[2].result.monthly_payment, 0.0);
    }

    #[test]
    fn test_from_repository() {
        let mut custom = default_settings();
        custom.interest_rate = 0.045;
        let store = InMemorySettingsStore::with_settings(custom);

        let mut runner = ScenarioRunner::from_repository(&store).unwrap();
        assert_eq!(runner.settings().interest_rate, 0.045);

        runner.settings_mut().vacancy_rate = 0.1;
        let r = runner.run(200_000.0, 2_000.0);
        assert!((r.vacancy - 200.0).abs() < 1e-9);
    }
}
