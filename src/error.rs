use thiserror::Error;

/// Trading Central SDK error types
#[derive(Debug, Error)]
pub enum TradingCentralError {
    /// Missing or invalid partner ID, partner key or language map
    #[error("Configuration error: {0}")]
    Config(String),

    /// The requested language is not mapped to any supported locale
    #[error("Language [{0}] is not supported")]
    UnsupportedLanguage(String),

    /// Malformed plaintext or ciphertext token
    #[error("Token error: {0}")]
    Token(String),
}
