use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Locales supported by Trading Central
///
/// Chinese is `zh_CN`, even though Trading Central documentation
/// sometimes calls it `zh_CH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "de_DE")]
    DeDe,
    #[serde(rename = "en_GB")]
    EnGb,
    #[serde(rename = "es_ES")]
    EsEs,
    #[serde(rename = "fr_FR")]
    FrFr,
    #[serde(rename = "it_IT")]
    ItIt,
    #[serde(rename = "ja_JP")]
    JaJp,
    #[serde(rename = "nl_NL")]
    NlNl,
    #[serde(rename = "ru_RU")]
    RuRu,
    #[serde(rename = "zh_CN")]
    ZhCn,
}

/// All supported locales, in Trading Central order
pub const SUPPORTED_LOCALES: &[Locale] = &Locale::ALL;

impl Locale {
    pub const ALL: [Locale; 9] = [
        Locale::DeDe,
        Locale::EnGb,
        Locale::EsEs,
        Locale::FrFr,
        Locale::ItIt,
        Locale::JaJp,
        Locale::NlNl,
        Locale::RuRu,
        Locale::ZhCn,
    ];

    /// Locale code as sent to Trading Central, e.g. `en_GB`
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::DeDe => "de_DE",
            Locale::EnGb => "en_GB",
            Locale::EsEs => "es_ES",
            Locale::FrFr => "fr_FR",
            Locale::ItIt => "it_IT",
            Locale::JaJp => "ja_JP",
            Locale::NlNl => "nl_NL",
            Locale::RuRu => "ru_RU",
            Locale::ZhCn => "zh_CN",
        }
    }

    /// Language part of the locale code (`ru` for `ru_RU`)
    pub fn language(self) -> &'static str {
        let code = self.as_str();
        code.split_once('_').map_or(code, |(language, _)| language)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .iter()
            .copied()
            .find(|locale| locale.as_str() == s)
            .ok_or_else(|| format!("Unsupported locale [{}]", s))
    }
}
