use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::TradingCentralError;
use crate::types::{PartnerId, PartnerKey};

use super::builder::TechnicalAnalysisBuilder;

/// Deserializable [`TechnicalAnalysis`](super::TechnicalAnalysis) settings
///
/// Every field is optional. Empty partner ID or key are treated as
/// not specified, so the error surfaces when a URL is requested.
///
/// ```json
/// {
///   "partner_id": "abcd",
///   "partner_key": "ABCdEfGhJkLmNop1qrS2Tv==",
///   "language_map": { "english": "en_GB", "russian": "ru_RU" }
/// }
/// ```
#[derive(Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TechnicalAnalysisConfig {
    pub partner_id: Option<String>,
    pub partner_key: Option<String>,
    pub url_template: Option<String>,
    pub language_map: Option<BTreeMap<String, String>>,
}

impl std::fmt::Debug for TechnicalAnalysisConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TechnicalAnalysisConfig")
            .field("partner_id", &self.partner_id)
            .field("partner_key", &self.partner_key.as_ref().map(|_| "[REDACTED]"))
            .field("url_template", &self.url_template)
            .field("language_map", &self.language_map)
            .finish()
    }
}

impl TechnicalAnalysisConfig {
    /// Parse configuration from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, TradingCentralError> {
        serde_json::from_str(json)
            .map_err(|e| TradingCentralError::Config(format!("Invalid configuration: {}", e)))
    }

    pub(crate) fn into_builder(self) -> Result<TechnicalAnalysisBuilder, TradingCentralError> {
        let mut builder = TechnicalAnalysisBuilder::default();

        if let Some(id) = self.partner_id.filter(|id| !id.is_empty()) {
            let partner_id = PartnerId::new(id).map_err(TradingCentralError::Config)?;
            builder = builder.partner_id(partner_id);
        }
        if let Some(key) = self.partner_key.filter(|key| !key.is_empty()) {
            let partner_key = PartnerKey::new(key).map_err(TradingCentralError::Config)?;
            builder = builder.partner_key(partner_key);
        }
        if let Some(url_template) = self.url_template {
            builder = builder.url_template(url_template);
        }
        if let Some(language_map) = self.language_map {
            builder = builder.language_map(language_map);
        }

        Ok(builder)
    }
}
