//! Basic usage example for trading-central-sdk
//!
//! Run with: cargo run --example basic_usage

use trading_central_sdk::{
    types::{PartnerId, PartnerKey},
    TechnicalAnalysis,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut ta = TechnicalAnalysis::new(
        Some(PartnerId::new("abcd")?),
        Some(PartnerKey::new("ABCdEfGhJkLmNop1qrS2Tv==")?),
    );

    println!("Supported locales:");
    for locale in TechnicalAnalysis::supported_locales() {
        println!("  {}", locale);
    }

    println!("URL: {}", ta.get_url("foobar", "en")?);

    ta.set_language_map([("english", "en_GB"), ("russian", "ru_RU")])?;
    println!("URL: {}", ta.get_url("foobar", "russian")?);

    Ok(())
}
