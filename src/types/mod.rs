pub mod ids;
pub mod language_map;
pub mod locale;

pub use ids::*;
pub use language_map::LanguageMap;
pub use locale::{Locale, SUPPORTED_LOCALES};
