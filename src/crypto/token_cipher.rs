//! Blowfish-ECB token encryption, compatible with PEAR `Crypt_Blowfish` 1.1.0RC2
//!
//! Trading Central decrypts tokens with the legacy scheme:
//! - Key: partner key (base64 decoded, 4 to 56 bytes)
//! - Mode: ECB, big-endian Blowfish
//! - Padding: NUL bytes up to the 8 byte block size, none if already aligned
//! - Output: standard base64

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use blowfish::Blowfish;
use ecb::cipher::block_padding::ZeroPadding;
use ecb::cipher::{BlockDecryptMut, BlockEncryptMut, KeyInit};
use ecb::{Decryptor, Encryptor};

use crate::error::TradingCentralError;
use crate::types::PartnerKey;

type BlowfishEcbEncryptor = Encryptor<Blowfish>;
type BlowfishEcbDecryptor = Decryptor<Blowfish>;

const MIN_KEY_LEN: usize = 4;
const MAX_KEY_LEN: usize = 56;

/// Partner keys are issued with non-canonical trailing bits
/// (`...Tv==`), which a strict decoder rejects.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Decode a partner key into raw Blowfish key bytes
pub fn decode_partner_key(partner_key: &PartnerKey) -> Result<Vec<u8>, TradingCentralError> {
    let key = LENIENT_BASE64
        .decode(partner_key.as_str())
        .map_err(|e| TradingCentralError::Config(format!("Invalid partner key: {}", e)))?;

    if !(MIN_KEY_LEN..=MAX_KEY_LEN).contains(&key.len()) {
        return Err(TradingCentralError::Config(format!(
            "Invalid partner key length: expected {}-{} bytes, got {}",
            MIN_KEY_LEN,
            MAX_KEY_LEN,
            key.len()
        )));
    }

    Ok(key)
}

/// Encrypt a plaintext token
///
/// # Returns
/// Base64 encoded ciphertext (not yet URL encoded)
///
/// # Errors
/// Returns `TradingCentralError::Config` for an empty token or an unusable partner key
pub fn encrypt_token(partner_key: &PartnerKey, token: &str) -> Result<String, TradingCentralError> {
    if token.is_empty() {
        return Err(TradingCentralError::Config("Empty token detected".to_string()));
    }

    let key = decode_partner_key(partner_key)?;
    let encryptor = BlowfishEcbEncryptor::new_from_slice(&key)
        .map_err(|e| TradingCentralError::Config(format!("Invalid partner key: {}", e)))?;

    let ciphertext = encryptor.encrypt_padded_vec_mut::<ZeroPadding>(token.as_bytes());
    Ok(BASE64.encode(ciphertext))
}

/// Decrypt a base64 encoded token back to plaintext
///
/// Trailing NUL padding is removed. This is what the receiving side does;
/// no expiry or field validation happens here.
pub fn decrypt_token(
    partner_key: &PartnerKey,
    encrypted_token: &str,
) -> Result<String, TradingCentralError> {
    let key = decode_partner_key(partner_key)?;
    let ciphertext = BASE64
        .decode(encrypted_token)
        .map_err(|e| TradingCentralError::Token(format!("Invalid encrypted token: {}", e)))?;

    let decryptor = BlowfishEcbDecryptor::new_from_slice(&key)
        .map_err(|e| TradingCentralError::Config(format!("Invalid partner key: {}", e)))?;

    let plaintext = decryptor
        .decrypt_padded_vec_mut::<ZeroPadding>(&ciphertext)
        .map_err(|e| TradingCentralError::Token(format!("Decryption failed: {:?}", e)))?;

    String::from_utf8(plaintext)
        .map_err(|e| TradingCentralError::Token(format!("Invalid UTF-8: {}", e)))
}
