//! Application language to Trading Central locale mapping

use std::collections::BTreeMap;

use crate::error::TradingCentralError;

use super::locale::{Locale, SUPPORTED_LOCALES};

/// Map of application languages to supported locales
///
/// The language key is whatever the application passes to
/// [`TechnicalAnalysis::get_url`](crate::TechnicalAnalysis::get_url),
/// e.g. `en` or `english`. A map is never empty and only ever holds
/// supported locales; both are checked when the map is created.
///
/// The default map uses the language part of every supported locale
/// as its key (`ru` for `ru_RU`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageMap {
    entries: BTreeMap<String, Locale>,
}

impl LanguageMap {
    /// Build a map from `(language, locale code)` pairs
    ///
    /// # Errors
    /// - `TradingCentralError::Config` if no pairs are given
    /// - `TradingCentralError::Config` naming the first locale code that is not supported
    pub fn new<I, K, V>(entries: I) -> Result<Self, TradingCentralError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut map = BTreeMap::new();
        for (language, locale) in entries {
            let locale = locale.as_ref();
            let parsed = locale.parse::<Locale>().map_err(|_| {
                TradingCentralError::Config(format!(
                    "Unsupported locale [{}] detected in map",
                    locale
                ))
            })?;
            map.insert(language.into(), parsed);
        }

        if map.is_empty() {
            return Err(TradingCentralError::Config(
                "Empty language maps are not allowed".to_string(),
            ));
        }

        Ok(Self { entries: map })
    }

    /// Locale mapped to `language`, if any
    pub fn get(&self, language: &str) -> Option<Locale> {
        self.entries.get(language).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Locale)> {
        self.entries
            .iter()
            .map(|(language, locale)| (language.as_str(), *locale))
    }
}

impl Default for LanguageMap {
    fn default() -> Self {
        let entries = SUPPORTED_LOCALES
            .iter()
            .map(|locale| (locale.language().to_string(), *locale))
            .collect();
        Self { entries }
    }
}
