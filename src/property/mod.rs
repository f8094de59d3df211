//! Listing input records and listing file loading

mod data;
pub mod loader;

pub use data::{PropertyData, ListingSite, RentSource, parse_currency, is_valid_price};
pub use loader::{load_properties, load_properties_from_reader};
