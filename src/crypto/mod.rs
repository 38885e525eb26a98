//! Token encryption for Trading Central
//!
//! ## Security
//!
//! Blowfish in ECB mode is kept only because the Trading Central login
//! endpoint decrypts tokens this way. It provides no integrity protection;
//! do not reuse it for anything else.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use trading_central_sdk::{crypto, types::PartnerKey};
//!
//! let key = PartnerKey::new("ABCdEfGhJkLmNop1qrS2Tv==")?;
//! let encrypted = crypto::encrypt_token(&key, "abcd,foobar,en_GB,1700000000")?;
//! let plaintext = crypto::decrypt_token(&key, &encrypted)?;
//! ```

pub mod token_cipher;

pub use token_cipher::{decode_partner_key, decrypt_token, encrypt_token};
