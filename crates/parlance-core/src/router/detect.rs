//! LanguageDetector trait definition.
//!
//! Routing rule 1 needs to know whether a query is English. The concrete
//! detector lives in parlance-infra; detection failure is not an error, it
//! maps to the [`DetectedLanguage::Unknown`] sentinel which the router
//! treats as non-English.

use parlance_types::routing::DetectedLanguage;

/// Classifies the language of a query string.
pub trait LanguageDetector: Send + Sync {
    fn detect(&self, text: &str) -> DetectedLanguage;
}
