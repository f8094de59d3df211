//! Core cashflow calculation for a rental property

use log::{debug, warn};

use super::result::{CashflowResult, PropertyAnalysis};
use crate::property::PropertyData;
use crate::settings::{default_settings, CashflowSettings};

/// Compute the monthly cashflow breakdown for a property.
///
/// `gross_monthly_rent` is used as given; callers resolve missing rent
/// (see [`PropertyData::resolve_rent`]) before calling. Never fails:
/// degenerate loans (zero term, zero or pathological rate) fall back to
/// straight-line figures instead of producing NaN or infinity.
pub fn calculate_cashflow(
    purchase_price: f64,
    gross_monthly_rent: f64,
    settings: &CashflowSettings,
) -> CashflowResult {
    // Financing
    let down_payment = settings.down_payment * purchase_price;
    let loan_amount = purchase_price - down_payment;
    let monthly_interest = settings.interest_rate / 12.0;
    let months = settings.loan_months();

    let (principal, monthly_payment) = if months == 0 {
        warn!("Loan term of zero months, mortgage payment treated as zero");
        (0.0, 0.0)
    } else {
        (
            loan_amount / months as f64,
            level_payment(loan_amount, monthly_interest, months),
        )
    };
    let interest = monthly_payment - principal;

    // Price-driven expenses are annual rates
    let hoa_fee = settings.hoa_fee;
    let property_tax = settings.property_tax * purchase_price / 12.0;
    let insurance = settings.insurance * purchase_price / 12.0;
    let maintenance = settings.maintenance * purchase_price / 12.0;
    let other_costs = settings.other_costs / 12.0;

    // Rent-driven expenses are monthly
    let vacancy = settings.vacancy_rate * gross_monthly_rent;
    let management_fee = settings.management_fee * gross_monthly_rent;

    let total_expenses = monthly_payment
        + vacancy
        + property_tax
        + insurance
        + maintenance
        + other_costs
        + hoa_fee
        + management_fee;
    let net_operating_income = gross_monthly_rent - total_expenses;

    CashflowResult {
        purchase_price,
        down_payment,
        loan_amount,
        monthly_interest,
        months,
        principal,
        interest,
        monthly_payment,
        hoa_fee,
        property_tax,
        insurance,
        maintenance,
        other_costs,
        vacancy,
        management_fee,
        rent: gross_monthly_rent,
        total_expenses,
        net_operating_income,
        values_used: settings.clone(),
    }
}

/// Level principal-and-interest payment for a fully amortizing loan.
/// `months` must be non-zero.
fn level_payment(loan_amount: f64, monthly_rate: f64, months: u32) -> f64 {
    let straight_line = loan_amount / months as f64;
    if monthly_rate == 0.0 {
        return straight_line;
    }

    let growth = 1.0 + monthly_rate;
    let denominator = 1.0 - growth.powf(-(months as f64));
    let payment = loan_amount * monthly_rate / denominator;
    if growth > 0.0 && denominator.is_finite() && denominator != 0.0 && payment.is_finite() {
        payment
    } else {
        debug!(
            "Annuity payment undefined for rate {} over {} months, using straight-line",
            monthly_rate, months
        );
        straight_line
    }
}

/// Cashflow engine bound to a set of settings
#[derive(Debug, Clone)]
pub struct CashflowEngine {
    settings: CashflowSettings,
}

impl CashflowEngine {
    pub fn new(settings: CashflowSettings) -> Self {
        Self { settings }
    }

    pub fn with_defaults() -> Self {
        Self::new(default_settings())
    }

    pub fn settings(&self) -> &CashflowSettings {
        &self.settings
    }

    /// Run the calculation with an already-resolved rent
    pub fn calculate(&self, purchase_price: f64, gross_monthly_rent: f64) -> CashflowResult {
        calculate_cashflow(purchase_price, gross_monthly_rent, &self.settings)
    }

    /// Resolve rent and HOA for a listing, then run the calculation
    pub fn analyze(&self, property: &PropertyData) -> PropertyAnalysis {
        let (rent, rent_source) = property.resolve_rent(&self.settings);

        let mut settings = self.settings.clone();
        settings.hoa_fee = property.resolve_hoa(&self.settings);

        debug!(
            "Analyzing {}: price {:.2}, rent {:.2} ({:?})",
            property.listing_id, property.price, rent, rent_source
        );

        PropertyAnalysis {
            listing_id: property.listing_id.clone(),
            rent_source,
            result: calculate_cashflow(property.price, rent, &settings),
        }
    }
}

impl Default for CashflowEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
