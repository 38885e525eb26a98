//! Plaintext login token
//!
//! As per Trading Central specification, the token is a comma separated
//! list of partner ID, user ID, locale, and the current Unix time. Fields
//! are not escaped, so a comma inside any of them makes the token ambiguous
//! for the receiving side.

use std::fmt;
use std::str::FromStr;

use crate::error::TradingCentralError;
use crate::types::{Locale, PartnerId};

const FIELD_SEPARATOR: char = ',';
const FIELD_COUNT: usize = 4;

/// Plaintext token, before encryption
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub partner_id: String,
    pub user_id: String,
    pub locale: Locale,
    /// Seconds since the Unix epoch
    pub issued_at: u64,
}

impl Token {
    pub fn new(
        partner_id: &PartnerId,
        user_id: impl Into<String>,
        locale: Locale,
        issued_at: u64,
    ) -> Self {
        Self {
            partner_id: partner_id.as_str().to_string(),
            user_id: user_id.into(),
            locale,
            issued_at,
        }
    }

    /// Whether any field contains the separator
    pub fn is_ambiguous(&self) -> bool {
        self.partner_id.contains(FIELD_SEPARATOR) || self.user_id.contains(FIELD_SEPARATOR)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}",
            self.partner_id,
            self.user_id,
            self.locale,
            self.issued_at,
            sep = FIELD_SEPARATOR
        )
    }
}

impl FromStr for Token {
    type Err = TradingCentralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(FIELD_SEPARATOR).collect();
        let [partner_id, user_id, locale, issued_at] = fields.as_slice() else {
            return Err(TradingCentralError::Token(format!(
                "expected {} fields, got {}",
                FIELD_COUNT,
                fields.len()
            )));
        };

        let locale = locale.parse::<Locale>().map_err(TradingCentralError::Token)?;
        let issued_at = issued_at
            .parse::<u64>()
            .map_err(|e| TradingCentralError::Token(format!("Invalid timestamp: {}", e)))?;

        Ok(Self {
            partner_id: partner_id.to_string(),
            user_id: user_id.to_string(),
            locale,
            issued_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partner() -> PartnerId {
        PartnerId::new("abcd").unwrap()
    }

    #[test]
    fn test_display_joins_with_commas() {
        let token = Token::new(&partner(), "foobar", Locale::EnGb, 1_700_000_000);
        assert_eq!(token.to_string(), "abcd,foobar,en_GB,1700000000");
    }

    #[test]
    fn test_parse() {
        let token: Token = "abcd,foobar,ru_RU,1700000000".parse().unwrap();
        assert_eq!(token.partner_id, "abcd");
        assert_eq!(token.user_id, "foobar");
        assert_eq!(token.locale, Locale::RuRu);
        assert_eq!(token.issued_at, 1_700_000_000);
    }

    #[test]
    fn test_parse_wrong_field_count() {
        let err = "abcd,foo,bar,en_GB,1700000000".parse::<Token>().unwrap_err();
        assert!(format!("{:?}", err).contains("expected 4 fields, got 5"));
    }

    #[test]
    fn test_parse_bad_timestamp() {
        let err = "abcd,foobar,en_GB,yesterday".parse::<Token>().unwrap_err();
        assert!(format!("{:?}", err).contains("Invalid timestamp"));
    }

    #[test]
    fn test_parse_bad_locale() {
        let err = "abcd,foobar,en_US,1700000000".parse::<Token>().unwrap_err();
        assert!(matches!(err, TradingCentralError::Token(_)));
    }

    #[test]
    fn test_ambiguous_user_id() {
        let token = Token::new(&partner(), "doe,john", Locale::EnGb, 1);
        assert!(token.is_ambiguous());
        assert!(!Token::new(&partner(), "john", Locale::EnGb, 1).is_ambiguous());
    }

    #[test]
    fn test_empty_user_id_still_four_fields() {
        let token = Token::new(&partner(), "", Locale::DeDe, 42);
        assert_eq!(token.to_string(), "abcd,,de_DE,42");
        assert_eq!(token.to_string().parse::<Token>().unwrap(), token);
    }
}
