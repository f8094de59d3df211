//! Settings repositories
//!
//! Callers that keep user overrides (an extension storage area, a config
//! file) hand them to the engine through `SettingsRepository`, so the
//! calculation never reads ambient state.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::{default_settings, CashflowSettings, SettingsPercentages};
use crate::error::Result;

/// Source of user-configured cashflow settings
pub trait SettingsRepository {
    /// Current settings, falling back to defaults when nothing is stored
    fn load(&self) -> Result<CashflowSettings>;

    /// Persist new settings
    fn save(&mut self, settings: &CashflowSettings) -> Result<()>;
}

/// Settings held in memory, starting from the defaults
#[derive(Debug, Clone, Default)]
pub struct InMemorySettingsStore {
    settings: CashflowSettings,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: CashflowSettings) -> Self {
        Self { settings }
    }
}

impl SettingsRepository for InMemorySettingsStore {
    fn load(&self) -> Result<CashflowSettings> {
        Ok(self.settings.clone())
    }

    fn save(&mut self, settings: &CashflowSettings) -> Result<()> {
        settings.validate()?;
        self.settings = settings.clone();
        Ok(())
    }
}

/// Settings stored as a JSON file of percentages
#[derive(Debug, Clone)]
pub struct JsonFileSettingsStore {
    path: PathBuf,
}

impl JsonFileSettingsStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsRepository for JsonFileSettingsStore {
    fn load(&self) -> Result<CashflowSettings> {
        if !self.path.exists() {
            debug!("No settings file at {}, using defaults", self.path.display());
            return Ok(default_settings());
        }

        let contents = fs::read_to_string(&self.path)?;
        let percentages: SettingsPercentages = serde_json::from_str(&contents)?;
        let settings = percentages.to_settings();
        settings.validate()?;

        debug!("Loaded settings from {}", self.path.display());
        Ok(settings)
    }

    fn save(&mut self, settings: &CashflowSettings) -> Result<()> {
        settings.validate()?;
        let json = serde_json::to_string_pretty(&SettingsPercentages::from_settings(settings))?;
        fs::write(&self.path, json)?;

        info!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CashflowError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_in_memory_store() {
        let mut store = InMemorySettingsStore::new();
        assert_eq!(store.load().unwrap(), default_settings());

        let mut custom = default_settings();
        custom.interest_rate = 0.07;
        store.save(&custom).unwrap();
        assert_eq!(store.load().unwrap().interest_rate, 0.07);

        custom.vacancy_rate = 2.0;
        assert!(store.save(&custom).is_err());
        assert_eq!(store.load().unwrap().vacancy_rate, 0.05);
    }

    #[test]
    fn test_json_store_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileSettingsStore::new(dir.path().join("settings.json"));
        assert_eq!(store.load().unwrap(), default_settings());
    }

    #[test]
    fn test_json_store_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileSettingsStore::new(dir.path().join("settings.json"));

        let mut custom = default_settings();
        custom.down_payment = 0.25;
        custom.loan_term = 15;
        custom.hoa_fee = 120.0;
        store.save(&custom).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"downPayment\": 25.0"));

        let loaded = store.load().unwrap();
        assert_abs_diff_eq!(loaded.down_payment, 0.25, epsilon = 1e-12);
        assert_eq!(loaded.loan_term, 15);
        assert_eq!(loaded.hoa_fee, 120.0);
    }

    #[test]
    fn test_json_store_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"vacancyRate": 150}"#).unwrap();

        let store = JsonFileSettingsStore::new(&path);
        assert!(matches!(
            store.load(),
            Err(CashflowError::InvalidSetting { field: "vacancy_rate", .. })
        ));

        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(store.load(), Err(CashflowError::Json(_))));
    }
}
