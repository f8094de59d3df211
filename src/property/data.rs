//! Listing data structures and rent/HOA resolution

use serde::{Deserialize, Serialize};
use crate::settings::{estimate_rent, CashflowSettings};

/// Real-estate sites listings can come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListingSite {
    Zillow,
    Redfin,
}

impl ListingSite {
    /// Identify the listing site from a page URL
    pub fn detect(url: &str) -> Option<Self> {
        if url.contains("zillow.com") {
            Some(Self::Zillow)
        } else if url.contains("redfin.com") {
            Some(Self::Redfin)
        } else {
            None
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Zillow => "Zillow",
            Self::Redfin => "Redfin",
        }
    }
}

/// Where the rent used for a calculation came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RentSource {
    /// User-supplied custom income
    Custom,
    /// Rent published on the listing
    Listing,
    /// Rule-of-thumb fraction of price
    Estimated,
}

/// A property listing as supplied by a scraper or a listings file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyData {
    pub listing_id: String,
    pub price: f64,

    /// Monthly rent estimate from the listing, if any
    pub rent: Option<f64>,

    /// Monthly HOA dues from the listing, if any
    pub property_hoa: Option<f64>,

    // Descriptive only
    pub address: Option<String>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<f64>,
    pub square_feet: Option<u32>,
}

impl PropertyData {
    /// Create a listing with only the fields the engine needs
    pub fn new(listing_id: impl Into<String>, price: f64) -> Self {
        Self {
            listing_id: listing_id.into(),
            price,
            rent: None,
            property_hoa: None,
            address: None,
            bedrooms: None,
            bathrooms: None,
            square_feet: None,
        }
    }

    pub fn with_rent(mut self, rent: f64) -> Self {
        self.rent = Some(rent);
        self
    }

    pub fn with_hoa(mut self, hoa: f64) -> Self {
        self.property_hoa = Some(hoa);
        self
    }

    /// Monthly rent to feed the engine.
    ///
    /// Custom income wins, then a positive listing rent, then the
    /// rule-of-thumb estimate.
    pub fn resolve_rent(&self, settings: &CashflowSettings) -> (f64, RentSource) {
        if let Some(income) = settings.custom_income {
            return (income, RentSource::Custom);
        }
        match self.rent {
            Some(rent) if rent > 0.0 => (rent, RentSource::Listing),
            _ => (estimate_rent(self.price), RentSource::Estimated),
        }
    }

    /// Monthly HOA: the listing's dues when known, else the configured fee.
    /// Configured dues are only a fallback for listings without HOA data.
    pub fn resolve_hoa(&self, settings: &CashflowSettings) -> f64 {
        match self.property_hoa {
            Some(hoa) if hoa > 0.0 => hoa,
            _ => settings.hoa_fee,
        }
    }
}

/// A usable purchase price: finite and not negative
pub fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price >= 0.0
}

/// Parse the first dollar amount in a text such as "$1,250,000" or
/// "Rent Zestimate: $2,450/mo". Returns 0 when no digits are present.
pub fn parse_currency(text: &str) -> f64 {
    let Some(start) = text.find(|c: char| c.is_ascii_digit()) else {
        return 0.0;
    };

    let digits: String = text[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ',')
        .filter(|c| c.is_ascii_digit())
        .collect();

    digits.parse().unwrap_or(0.0)
}
