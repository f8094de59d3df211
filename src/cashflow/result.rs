//! Cashflow output structures

use serde::{Deserialize, Serialize};
use crate::property::RentSource;
use crate::settings::CashflowSettings;

/// Monthly cashflow breakdown for one property.
///
/// Every intermediate figure is kept so a presentation layer can render
/// each line item. All currency amounts are monthly unless noted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashflowResult {
    pub purchase_price: f64,

    // Financing
    pub down_payment: f64,
    pub loan_amount: f64,
    pub monthly_interest: f64,
    pub months: u32,
    /// Straight-line share of the loan per month
    pub principal: f64,
    /// `monthly_payment - principal`, a display figure rather than the
    /// first-period interest of the amortizing loan
    pub interest: f64,
    pub monthly_payment: f64,

    // Operating expenses
    pub hoa_fee: f64,
    pub property_tax: f64,
    pub insurance: f64,
    pub maintenance: f64,
    pub other_costs: f64,
    pub vacancy: f64,
    pub management_fee: f64,

    // Summary
    pub rent: f64,
    pub total_expenses: f64,
    pub net_operating_income: f64,

    /// Settings the figures were computed with
    pub values_used: CashflowSettings,
}

/// Whether a property pays for itself each month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CashflowSign {
    Positive,
    Negative,
}

impl CashflowSign {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Positive => "Positive Cashflow",
            Self::Negative => "Negative Cashflow",
        }
    }
}

impl CashflowResult {
    /// Strictly positive net operating income
    pub fn is_positive(&self) -> bool {
        self.net_operating_income > 0.0
    }

    pub fn sign(&self) -> CashflowSign {
        if self.is_positive() {
            CashflowSign::Positive
        } else {
            CashflowSign::Negative
        }
    }

    /// Expense lines in display order
    pub fn line_items(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("Mortgage", self.monthly_payment),
            ("Property Tax", self.property_tax),
            ("Insurance", self.insurance),
            ("Maintenance", self.maintenance),
            ("Vacancy", self.vacancy),
            ("HOA", self.hoa_fee),
            ("Management", self.management_fee),
            ("Other", self.other_costs),
        ]
    }

    pub fn summary(&self) -> CashflowSummary {
        CashflowSummary {
            monthly_income: self.rent,
            monthly_expenses: self.total_expenses,
            net_monthly: self.net_operating_income,
            net_annual: self.net_operating_income * 12.0,
            sign: self.sign(),
        }
    }
}

/// Headline figures for a result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashflowSummary {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub net_monthly: f64,
    pub net_annual: f64,
    pub sign: CashflowSign,
}

/// Result for one listing along with how its rent was chosen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyAnalysis {
    pub listing_id: String,
    pub rent_source: RentSource,
    pub result: CashflowResult,
}
