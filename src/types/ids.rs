use serde::{Deserialize, Serialize};

/// Trading Central partner ID (e.g. `fxpro`, `fxcc`)
///
/// Used both as the URL subdomain and as the first token field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartnerId(String);

impl PartnerId {
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.is_empty() {
            return Err("PartnerId must not be empty".to_string());
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PartnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trading Central partner encryption key (base64 encoded, like `ABCdEfJhIkLmNop1qrS2Tu==`)
///
/// The value is never printed by `Debug`.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartnerKey(String);

impl PartnerKey {
    pub fn new(key: impl Into<String>) -> Result<Self, String> {
        let key = key.into();
        if key.is_empty() {
            return Err("PartnerKey must not be empty".to_string());
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for PartnerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PartnerKey").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partner_id_valid() {
        let partner_id = PartnerId::new("abcd").unwrap();
        assert_eq!(partner_id.as_str(), "abcd");
        assert_eq!(partner_id.to_string(), "abcd");
    }

    #[test]
    fn test_partner_id_empty() {
        let result = PartnerId::new("");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("must not be empty"));
    }

    #[test]
    fn test_partner_key_valid() {
        let key = PartnerKey::new("ABCdEfGhJkLmNop1qrS2Tv==").unwrap();
        assert_eq!(key.as_str(), "ABCdEfGhJkLmNop1qrS2Tv==");
    }

    #[test]
    fn test_partner_key_empty() {
        assert!(PartnerKey::new(String::new()).is_err());
    }

    #[test]
    fn test_partner_key_debug_is_redacted() {
        let key = PartnerKey::new("ABCdEfGhJkLmNop1qrS2Tv==").unwrap();
        let debug = format!("{:?}", key);
        assert!(!debug.contains("ABCdEf"));
        assert!(debug.contains("REDACTED"));
    }
}
