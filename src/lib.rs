//! Trading Central Technical Analysis SDK for Rust
//!
//! Generates a user-specific, temporary login URL for Trading Central's
//! Technical Analysis service. The URL carries an encrypted token made of
//! the partner ID, user ID, locale and current time; Trading Central
//! decrypts it and expires it on its side.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use trading_central_sdk::{TechnicalAnalysis, types::{PartnerId, PartnerKey}};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ta = TechnicalAnalysis::new(
//!         Some(PartnerId::new("abcd")?),
//!         Some(PartnerKey::new("ABCdEfGhJkLmNop1qrS2Tv==")?),
//!     );
//!
//!     // http://abcd.tradingcentral.com/login.asp?token=...
//!     let url = ta.get_url("foobar", "en")?;
//!     println!("{}", url);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`client`] - URL builder, its builder and deserializable config
//! - [`crypto`] - Legacy Blowfish token encryption
//! - [`error`] - Error types
//! - [`token`] - Plaintext token format
//! - [`types`] - Partner credentials, locales and language maps
//!
//! ## Error Handling
//!
//! ```rust,ignore
//! use trading_central_sdk::TradingCentralError;
//!
//! match ta.get_url("foobar", "klingon") {
//!     Ok(url) => { /* redirect */ }
//!     Err(TradingCentralError::UnsupportedLanguage(language)) => {
//!         eprintln!("No locale for {}", language);
//!     }
//!     Err(e) => {
//!         eprintln!("Misconfigured: {}", e);
//!     }
//! }
//! ```

pub mod client;
pub mod crypto;
pub mod error;
pub mod token;
pub mod types;
mod utils;

pub use client::{TechnicalAnalysis, TechnicalAnalysisBuilder, TechnicalAnalysisConfig};
pub use error::TradingCentralError;
