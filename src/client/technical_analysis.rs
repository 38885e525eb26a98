//! Technical Analysis URL generation

use log::{debug, warn};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::crypto;
use crate::error::TradingCentralError;
use crate::token::Token;
use crate::types::{LanguageMap, Locale, PartnerId, PartnerKey, SUPPORTED_LOCALES};
use crate::utils::unix_timestamp;

use super::builder::TechnicalAnalysisBuilder;
use super::config::TechnicalAnalysisConfig;

/// Trading Central login URL pattern
pub const DEFAULT_URL_TEMPLATE: &str =
    "http://###PARTNER###.tradingcentral.com/login.asp?token=###TOKEN###";

pub const PARTNER_PLACEHOLDER: &str = "###PARTNER###";
pub const TOKEN_PLACEHOLDER: &str = "###TOKEN###";

/// Same set as PHP `urlencode`: everything but ASCII alphanumerics and `-_.`
const TOKEN_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Trading Central Technical Analysis URL builder
///
/// Generates a user-specific, temporary URL to Trading Central's
/// Technical Analysis. The receiving side decrypts the token and
/// expires it based on the embedded timestamp.
///
/// Partner ID and partner key are optional at construction time;
/// their absence is only reported when a URL is requested.
///
/// # Example
///
/// ```rust,ignore
/// use trading_central_sdk::{TechnicalAnalysis, types::{PartnerId, PartnerKey}};
///
/// let ta = TechnicalAnalysis::new(
///     Some(PartnerId::new("abcd")?),
///     Some(PartnerKey::new("ABCdEfGhJkLmNop1qrS2Tv==")?),
/// );
/// let url = ta.get_url("foobar", "en")?;
/// ```
#[derive(Clone)]
pub struct TechnicalAnalysis {
    partner_id: Option<PartnerId>,
    partner_key: Option<PartnerKey>,
    url_template: String,
    language_map: LanguageMap,
}

impl std::fmt::Debug for TechnicalAnalysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TechnicalAnalysis")
            .field("partner_id", &self.partner_id)
            .field("url_template", &self.url_template)
            .field("language_map", &self.language_map)
            .finish_non_exhaustive()
    }
}

impl TechnicalAnalysis {
    /// Create a URL builder with the default URL template and language map
    pub fn new(partner_id: Option<PartnerId>, partner_key: Option<PartnerKey>) -> Self {
        Self::with_parts(
            partner_id,
            partner_key,
            DEFAULT_URL_TEMPLATE.to_string(),
            LanguageMap::default(),
        )
    }

    /// Create a new builder
    pub fn builder() -> TechnicalAnalysisBuilder {
        TechnicalAnalysisBuilder::default()
    }

    /// Create a URL builder from deserialized configuration
    pub fn from_config(config: TechnicalAnalysisConfig) -> Result<Self, TradingCentralError> {
        config.into_builder()?.build()
    }

    pub(crate) fn with_parts(
        partner_id: Option<PartnerId>,
        partner_key: Option<PartnerKey>,
        url_template: String,
        language_map: LanguageMap,
    ) -> Self {
        if !url_template.contains(TOKEN_PLACEHOLDER) {
            warn!(
                "[TechnicalAnalysis] URL template has no {} placeholder: {}",
                TOKEN_PLACEHOLDER, url_template
            );
        }

        Self {
            partner_id,
            partner_key,
            url_template,
            language_map,
        }
    }

    /// Locales supported by Trading Central
    pub fn supported_locales() -> &'static [Locale] {
        SUPPORTED_LOCALES
    }

    /// Get the partner ID, if configured
    pub fn partner_id(&self) -> Option<&PartnerId> {
        self.partner_id.as_ref()
    }

    /// Get the URL template
    pub fn url_template(&self) -> &str {
        &self.url_template
    }

    /// Get the current language map
    pub fn language_map(&self) -> &LanguageMap {
        &self.language_map
    }

    /// Replace the language map
    ///
    /// The whole map is replaced; entries are not merged with the
    /// previous map. On error the previous map stays in place.
    ///
    /// # Errors
    /// Returns `TradingCentralError::Config` if the map is empty or maps
    /// a language to an unsupported locale.
    pub fn set_language_map<I, K, V>(&mut self, entries: I) -> Result<(), TradingCentralError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let language_map = LanguageMap::new(entries)?;
        debug!(
            "[TechnicalAnalysis] language map replaced ({} languages)",
            language_map.len()
        );
        self.language_map = language_map;
        Ok(())
    }

    /// Convert an application language to a Trading Central locale
    ///
    /// There is no fallback: unmapped languages are an error.
    pub fn locale_for(&self, language: &str) -> Result<Locale, TradingCentralError> {
        self.language_map
            .get(language)
            .ok_or_else(|| TradingCentralError::UnsupportedLanguage(language.to_string()))
    }

    /// Get the login URL for a user in the preferred language
    ///
    /// The token embeds the current time, so URLs generated within the
    /// same second for the same user and language are identical.
    ///
    /// # Errors
    /// - `TradingCentralError::UnsupportedLanguage` if `language` is not mapped
    /// - `TradingCentralError::Config` if partner ID or partner key is missing or invalid
    pub fn get_url(&self, user_id: &str, language: &str) -> Result<String, TradingCentralError> {
        self.get_url_at(user_id, language, unix_timestamp())
    }

    /// Same as [`get_url`](Self::get_url) with an explicit token timestamp
    /// (seconds since the Unix epoch)
    pub fn get_url_at(
        &self,
        user_id: &str,
        language: &str,
        issued_at: u64,
    ) -> Result<String, TradingCentralError> {
        let locale = self.locale_for(language)?;
        let token = self.token(user_id, locale, issued_at)?;
        let encrypted_token = self.encrypt_token(&token)?;
        let url = self.build_url(&encrypted_token);

        debug!(
            "[TechnicalAnalysis] issued URL partner={} locale={} issued_at={}",
            token.partner_id, token.locale, token.issued_at
        );

        Ok(url)
    }

    fn token(
        &self,
        user_id: &str,
        locale: Locale,
        issued_at: u64,
    ) -> Result<Token, TradingCentralError> {
        let partner_id = self.partner_id.as_ref().ok_or_else(|| {
            TradingCentralError::Config("Partner ID is not specified".to_string())
        })?;

        let token = Token::new(partner_id, user_id, locale, issued_at);
        if token.is_ambiguous() {
            warn!(
                "[TechnicalAnalysis] token fields contain ',', receiver may misparse user {}",
                user_id
            );
        }
        Ok(token)
    }

    /// Encrypt the token and make it safe for a query string
    fn encrypt_token(&self, token: &Token) -> Result<String, TradingCentralError> {
        let plaintext = token.to_string();
        if plaintext.is_empty() {
            return Err(TradingCentralError::Config("Empty token detected".to_string()));
        }

        let partner_key = self.partner_key.as_ref().ok_or_else(|| {
            TradingCentralError::Config("Partner key is not specified".to_string())
        })?;

        let encrypted = crypto::encrypt_token(partner_key, &plaintext)?;
        Ok(utf8_percent_encode(&encrypted, TOKEN_ENCODE_SET).to_string())
    }

    /// Fill the URL template with actual values
    fn build_url(&self, encrypted_token: &str) -> String {
        let partner_id = self.partner_id.as_ref().map_or("", PartnerId::as_str);
        self.url_template
            .replace(PARTNER_PLACEHOLDER, partner_id)
            .replace(TOKEN_PLACEHOLDER, encrypted_token)
    }
}
