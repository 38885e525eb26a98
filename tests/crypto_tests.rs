use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use trading_central_sdk::crypto::{decode_partner_key, decrypt_token, encrypt_token};
use trading_central_sdk::token::Token;
use trading_central_sdk::types::{Locale, PartnerKey};
use trading_central_sdk::TradingCentralError;

fn key(value: &str) -> PartnerKey {
    PartnerKey::new(value).unwrap()
}

// Eric Young's Blowfish test vectors, single block so no padding applies

#[test]
fn test_blowfish_vector_zero_key() {
    let encrypted = encrypt_token(&key("AAAAAAAAAAA="), "\0\0\0\0\0\0\0\0").unwrap();
    assert_eq!(encrypted, "TvmXRWGY3Xg=");
}

#[test]
fn test_blowfish_vector_repeated_byte() {
    let plaintext = "\x11\x11\x11\x11\x11\x11\x11\x11";
    let encrypted = encrypt_token(&key("ERERERERERE="), plaintext).unwrap();
    assert_eq!(encrypted, "JGbdh4uWPJ0=");
}

#[test]
fn test_encrypt_known_token() {
    let encrypted = encrypt_token(
        &key("ABCdEfGhJkLmNop1qrS2Tv=="),
        "abcd,foobar,en_GB,1700000000",
    )
    .unwrap();
    assert_eq!(encrypted, "6nmKboFiRreU9Fm8wWl6u5Z58LaWU0v+d6MvwmJlEkk=");
}

#[test]
fn test_ecb_blocks_are_independent() {
    // Same 8 byte prefix, same first ciphertext block
    let partner_key = key("ABCdEfGhJkLmNop1qrS2Tv==");
    let first = BASE64
        .decode(encrypt_token(&partner_key, "abcd,fooXXXXXXXX").unwrap())
        .unwrap();
    let second = BASE64
        .decode(encrypt_token(&partner_key, "abcd,fooYYYYYYYY").unwrap())
        .unwrap();
    assert_eq!(first[..8], second[..8]);
    assert_ne!(first[8..], second[8..]);
}

#[test]
fn test_round_trip_parses_token() {
    let partner_key = key("ABCdEfGhJkLmNop1qrS2Tv==");
    let encrypted = encrypt_token(&partner_key, "abcd,foobar,fr_FR,1700000123").unwrap();

    let token: Token = decrypt_token(&partner_key, &encrypted)
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(token.partner_id, "abcd");
    assert_eq!(token.user_id, "foobar");
    assert_eq!(token.locale, Locale::FrFr);
    assert_eq!(token.issued_at, 1_700_000_123);
}

#[test]
fn test_decrypt_with_wrong_key_does_not_round_trip() {
    let encrypted =
        encrypt_token(&key("ABCdEfGhJkLmNop1qrS2Tv=="), "abcd,foobar,en_GB,1").unwrap();
    let result = decrypt_token(&key("MTIzNDU2Nzg5MDEyMzQ1Ng=="), &encrypted);
    match result {
        Ok(plaintext) => assert_ne!(plaintext, "abcd,foobar,en_GB,1"),
        Err(err) => assert!(matches!(err, TradingCentralError::Token(_))),
    }
}

#[test]
fn test_longest_partner_key() {
    let partner_key = key(&BASE64.encode([0x5au8; 56]));
    assert_eq!(decode_partner_key(&partner_key).unwrap().len(), 56);
    let encrypted = encrypt_token(&partner_key, "abcd,foobar,en_GB,1").unwrap();
    assert_eq!(decrypt_token(&partner_key, &encrypted).unwrap(), "abcd,foobar,en_GB,1");
}

#[test]
fn test_invalid_base64_encrypted_token() {
    let result = decrypt_token(&key("ABCdEfGhJkLmNop1qrS2Tv=="), "not-valid!!!");
    let err = result.unwrap_err();
    assert!(format!("{:?}", err).contains("Invalid encrypted token"));
}

#[test]
fn test_empty_token_rejected_before_key_is_used() {
    let result = encrypt_token(&key("%%%"), "");
    assert!(format!("{:?}", result.unwrap_err()).contains("Empty token detected"));
}
