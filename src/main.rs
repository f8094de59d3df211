//! RealEst Cashflow CLI
//!
//! Command-line interface for analysing a single listing

use anyhow::{bail, Context, Result};
use clap::Parser;
use realest_cashflow::cashflow::{format_currency, format_percent};
use realest_cashflow::property::is_valid_price;
use realest_cashflow::settings::{JsonFileSettingsStore, SettingsRepository};
use realest_cashflow::{CashflowEngine, PropertyData};

#[derive(Parser, Debug)]
#[command(name = "realest_cashflow", version, about = "Estimate monthly cashflow for a rental listing")]
struct Args {
    /// Purchase price in dollars
    #[arg(long)]
    price: f64,

    /// Monthly rent; estimated from price when omitted
    #[arg(long)]
    rent: Option<f64>,

    /// Monthly HOA dues from the listing
    #[arg(long)]
    hoa: Option<f64>,

    /// JSON settings file (percent values)
    #[arg(long)]
    settings: Option<std::path::PathBuf>,

    /// Annual interest rate in percent, overrides the settings file
    #[arg(long)]
    interest_rate: Option<f64>,

    /// Down payment in percent, overrides the settings file
    #[arg(long)]
    down_payment: Option<f64>,

    /// Loan term in years, overrides the settings file
    #[arg(long)]
    loan_term: Option<u32>,

    /// Print the full result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    if !is_valid_price(args.price) {
        bail!("Price must be a non-negative number, got {}", args.price);
    }

    let mut settings = match &args.settings {
        Some(path) => JsonFileSettingsStore::new(path)
            .load()
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => realest_cashflow::default_settings(),
    };
    if let Some(rate) = args.interest_rate {
        settings.interest_rate = rate / 100.0;
    }
    if let Some(down) = args.down_payment {
        settings.down_payment = down / 100.0;
    }
    if let Some(term) = args.loan_term {
        settings.loan_term = term;
    }
    settings.validate().context("Invalid settings")?;

    let mut property = PropertyData::new("cli", args.price);
    property.rent = args.rent;
    property.property_hoa = args.hoa;

    let analysis = CashflowEngine::new(settings).analyze(&property);
    let result = &analysis.result;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    let summary = result.summary();
    println!("RealEst Cashflow Analysis");
    println!("=========================\n");
    println!("  Price:          {}", format_currency(result.purchase_price));
    println!("  Down Payment:   {} ({})", format_currency(result.down_payment), format_percent(result.values_used.down_payment));
    println!("  Loan:           {} at {} over {} months", format_currency(result.loan_amount), format_percent(result.values_used.interest_rate), result.months);
    println!("  Rent:           {} ({:?})", format_currency(result.rent), analysis.rent_source);
    println!();

    println!("Expense Breakdown:");
    for (label, amount) in result.line_items() {
        println!("  {:<14} {:>12}", format!("{}:", label), format_currency(amount));
    }
    println!("  {:<14} {:>12}", "Principal:", format_currency(result.principal));
    println!("  {:<14} {:>12}", "Interest:", format_currency(result.interest));
    println!();

    println!("Summary:");
    println!("  Monthly Income:   {}", format_currency(summary.monthly_income));
    println!("  Monthly Expenses: {}", format_currency(summary.monthly_expenses));
    println!("  Net Monthly:      {}", format_currency(summary.net_monthly));
    println!("  Net Annual:       {}", format_currency(summary.net_annual));
    println!("  {}", summary.sign.label());

    Ok(())
}
