//! Cart Config

use clap::Args;
use rusty_money::iso::{self, Currency};

/// Cart pricing settings.
#[derive(Debug, Args)]
pub struct CartConfig {
    /// ISO 4217 currency that ticket prices are stored in
    #[arg(long, env = "CART_CURRENCY", default_value = "GBP", value_parser = parse_currency)]
    pub currency: &'static Currency,
}

fn parse_currency(code: &str) -> Result<&'static Currency, String> {
    iso::find(&code.trim().to_ascii_uppercase()).ok_or_else(|| format!("unknown currency: {code}"))
}
