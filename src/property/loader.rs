//! Load listings from a CSV file
//!
//! Expected header:
//! `ListingId,Price,Rent,Hoa,Address,Bedrooms,Bathrooms,SquareFeet`.
//! Empty cells mean the value is unknown.

use std::io::Read;
use std::path::Path;

use csv::{Reader, StringRecord};
use log::debug;

use super::{is_valid_price, PropertyData};
use crate::error::{CashflowError, Result};

/// Raw CSV row matching the listings file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "ListingId")]
    listing_id: String,
    #[serde(rename = "Price")]
    price: f64,
    #[serde(rename = "Rent")]
    rent: Option<f64>,
    #[serde(rename = "Hoa")]
    hoa: Option<f64>,
    #[serde(rename = "Address")]
    address: Option<String>,
    #[serde(rename = "Bedrooms")]
    bedrooms: Option<u32>,
    #[serde(rename = "Bathrooms")]
    bathrooms: Option<f64>,
    #[serde(rename = "SquareFeet")]
    square_feet: Option<u32>,
}

impl CsvRow {
    fn into_property(self, line: u64) -> Result<PropertyData> {
        if !is_valid_price(self.price) {
            return Err(CashflowError::InvalidRecord {
                line,
                reason: format!("price must be a non-negative number, got {}", self.price),
            });
        }

        Ok(PropertyData {
            listing_id: self.listing_id,
            price: self.price,
            rent: self.rent,
            property_hoa: self.hoa,
            address: self.address.filter(|a| !a.is_empty()),
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            square_feet: self.square_feet,
        })
    }
}

/// Load all listings from a CSV file
pub fn load_properties<P: AsRef<Path>>(path: P) -> Result<Vec<PropertyData>> {
    let reader = Reader::from_path(path.as_ref())?;
    let properties = read_all(reader)?;
    debug!("Loaded {} listings from {}", properties.len(), path.as_ref().display());
    Ok(properties)
}

/// Load listings from any reader (e.g., string buffer, network stream)
pub fn load_properties_from_reader<R: Read>(reader: R) -> Result<Vec<PropertyData>> {
    read_all(Reader::from_reader(reader))
}

fn read_all<R: Read>(mut reader: Reader<R>) -> Result<Vec<PropertyData>> {
    let headers = reader.headers()?.clone();
    let mut record = StringRecord::new();
    let mut properties = Vec::new();

    while reader.read_record(&mut record)? {
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let row: CsvRow = record.deserialize(Some(&headers))?;
        properties.push(row.into_property(line)?);
    }

    Ok(properties)
}
