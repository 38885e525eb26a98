use crate::error::TradingCentralError;
use crate::types::{LanguageMap, PartnerId, PartnerKey};

use super::technical_analysis::{TechnicalAnalysis, DEFAULT_URL_TEMPLATE};

/// Builder for [`TechnicalAnalysis`]
///
/// # Example
///
/// ```rust,ignore
/// use trading_central_sdk::{TechnicalAnalysis, types::{PartnerId, PartnerKey}};
///
/// let ta = TechnicalAnalysis::builder()
///     .partner_id(PartnerId::new("abcd")?)
///     .partner_key(PartnerKey::new("ABCdEfGhJkLmNop1qrS2Tv==")?)
///     .language_map([("english", "en_GB"), ("russian", "ru_RU")])
///     .build()?;
/// ```
#[must_use]
#[derive(Debug, Default)]
pub struct TechnicalAnalysisBuilder {
    partner_id: Option<PartnerId>,
    partner_key: Option<PartnerKey>,
    url_template: Option<String>,
    language_map: Option<Vec<(String, String)>>,
}

impl TechnicalAnalysisBuilder {
    pub fn partner_id(mut self, partner_id: PartnerId) -> Self {
        self.partner_id = Some(partner_id);
        self
    }

    pub fn partner_key(mut self, partner_key: PartnerKey) -> Self {
        self.partner_key = Some(partner_key);
        self
    }

    /// URL pattern with `###PARTNER###` and `###TOKEN###` placeholders
    pub fn url_template(mut self, url_template: impl Into<String>) -> Self {
        self.url_template = Some(url_template.into());
        self
    }

    /// Language to locale code pairs; validated in [`build`](Self::build)
    pub fn language_map<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.language_map = Some(
            entries
                .into_iter()
                .map(|(language, locale)| (language.into(), locale.into()))
                .collect(),
        );
        self
    }

    /// # Errors
    /// Returns `TradingCentralError::Config` if a language map was given
    /// and is empty or holds an unsupported locale.
    pub fn build(self) -> Result<TechnicalAnalysis, TradingCentralError> {
        let language_map = match self.language_map {
            Some(entries) => LanguageMap::new(entries)?,
            None => LanguageMap::default(),
        };

        let url_template = self
            .url_template
            .unwrap_or_else(|| DEFAULT_URL_TEMPLATE.to_string());

        Ok(TechnicalAnalysis::with_parts(
            self.partner_id,
            self.partner_key,
            url_template,
            language_map,
        ))
    }
}
