//! Run cashflow analyses for every listing in a CSV file
//!
//! Outputs one row per listing plus a block summary

use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;
use realest_cashflow::cashflow::{format_currency, write_analyses_to_path};
use realest_cashflow::property::load_properties;
use realest_cashflow::settings::{JsonFileSettingsStore, SettingsRepository};
use realest_cashflow::{default_settings, CashflowEngine, PropertyAnalysis};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "run_portfolio", about = "Cashflow analysis for a file of listings")]
struct Args {
    /// Listings CSV (ListingId,Price,Rent,Hoa,Address,Bedrooms,Bathrooms,SquareFeet)
    listings: PathBuf,

    /// JSON settings file (percent values)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Output CSV path
    #[arg(long, default_value = "portfolio_cashflow_output.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let settings = match &args.settings {
        Some(path) => JsonFileSettingsStore::new(path)
            .load()
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => default_settings(),
    };

    let properties = load_properties(&args.listings)
        .with_context(|| format!("Failed to load listings from {}", args.listings.display()))?;
    println!("Loaded {} listings in {:?}", properties.len(), start.elapsed());

    let engine = CashflowEngine::new(settings);
    let analyses: Vec<PropertyAnalysis> = properties
        .par_iter()
        .map(|property| engine.analyze(property))
        .collect();

    write_analyses_to_path(&args.output, &analyses)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    println!("Output written to {}", args.output.display());

    let positive = analyses.iter().filter(|a| a.result.is_positive()).count();
    let total_noi: f64 = analyses.iter().map(|a| a.result.net_operating_income).sum();

    println!("\nPortfolio Summary:");
    println!("  Listings:          {}", analyses.len());
    println!("  Positive cashflow: {}", positive);
    println!("  Negative cashflow: {}", analyses.len() - positive);
    println!("  Total monthly NOI: {}", format_currency(total_noi));
    if let Some(best) = analyses
        .iter()
        .max_by(|a, b| a.result.net_operating_income.total_cmp(&b.result.net_operating_income))
    {
        println!("  Best listing:      {} ({}/mo)", best.listing_id, format_currency(best.result.net_operating_income));
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}
