//! CSV output of listing analyses

use std::io::Write;
use std::path::Path;

use csv::Writer;
use serde::Serialize;

use super::result::PropertyAnalysis;
use crate::error::Result;
use crate::property::RentSource;

/// One output row per listing, amounts rounded to cents
#[derive(Debug, Serialize)]
struct OutputRow<'a> {
    #[serde(rename = "ListingId")]
    listing_id: &'a str,
    #[serde(rename = "Price")]
    price: f64,
    #[serde(rename = "Rent")]
    rent: f64,
    #[serde(rename = "RentSource")]
    rent_source: RentSource,
    #[serde(rename = "DownPayment")]
    down_payment: f64,
    #[serde(rename = "LoanAmount")]
    loan_amount: f64,
    #[serde(rename = "MonthlyPayment")]
    monthly_payment: f64,
    #[serde(rename = "Principal")]
    principal: f64,
    #[serde(rename = "Interest")]
    interest: f64,
    #[serde(rename = "PropertyTax")]
    property_tax: f64,
    #[serde(rename = "Insurance")]
    insurance: f64,
    #[serde(rename = "Maintenance")]
    maintenance: f64,
    #[serde(rename = "Vacancy")]
    vacancy: f64,
    #[serde(rename = "Management")]
    management: f64,
    #[serde(rename = "HOA")]
    hoa: f64,
    #[serde(rename = "Other")]
    other: f64,
    #[serde(rename = "TotalExpenses")]
    total_expenses: f64,
    #[serde(rename = "NetOperatingIncome")]
    net_operating_income: f64,
}

impl<'a> From<&'a PropertyAnalysis> for OutputRow<'a> {
    fn from(a: &'a PropertyAnalysis) -> Self {
        let r = &a.result;
        Self {
            listing_id: &a.listing_id,
            price: cents(r.purchase_price),
            rent: cents(r.rent),
            rent_source: a.rent_source,
            down_payment: cents(r.down_payment),
            loan_amount: cents(r.loan_amount),
            monthly_payment: cents(r.monthly_payment),
            principal: cents(r.principal),
            interest: cents(r.interest),
            property_tax: cents(r.property_tax),
            insurance: cents(r.insurance),
            maintenance: cents(r.maintenance),
            vacancy: cents(r.vacancy),
            management: cents(r.management_fee),
            hoa: cents(r.hoa_fee),
            other: cents(r.other_costs),
            total_expenses: cents(r.total_expenses),
            net_operating_income: cents(r.net_operating_income),
        }
    }
}

fn cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Write analyses as CSV with a header row
pub fn write_analyses<W: Write>(writer: W, analyses: &[PropertyAnalysis]) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);
    for analysis in analyses {
        csv_writer.serialize(OutputRow::from(analysis))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write analyses to a CSV file
pub fn write_analyses_to_path<P: AsRef<Path>>(path: P, analyses: &[PropertyAnalysis]) -> Result<()> {
    let file = std::fs::File::create(path.as_ref())?;
    write_analyses(file, analyses)
}
