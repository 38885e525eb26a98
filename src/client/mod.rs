//! Trading Central URL builder
//!
//! This module contains [`TechnicalAnalysis`] and the ways to configure it.

mod technical_analysis;
pub use technical_analysis::{
    TechnicalAnalysis, DEFAULT_URL_TEMPLATE, PARTNER_PLACEHOLDER, TOKEN_PLACEHOLDER,
};

mod builder;
pub use builder::TechnicalAnalysisBuilder;

mod config;
pub use config::TechnicalAnalysisConfig;
