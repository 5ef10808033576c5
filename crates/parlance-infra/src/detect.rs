//! whatlang-based language detection.
//!
//! Detection never fails loudly: anything whatlang cannot classify maps to
//! [`DetectedLanguage::Unknown`], which the router treats as non-English.

use tracing::debug;

use parlance_core::router::LanguageDetector;
use parlance_types::routing::DetectedLanguage;

/// Language detector backed by the whatlang trigram classifier.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhatlangDetector;

impl WhatlangDetector {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageDetector for WhatlangDetector {
    fn detect(&self, text: &str) -> DetectedLanguage {
        match whatlang::detect(text) {
            Some(info) if info.lang() == whatlang::Lang::Eng => DetectedLanguage::English,
            Some(info) => {
                debug!(lang = info.lang().code(), confidence = info.confidence(), "non-English query");
                DetectedLanguage::Other(info.lang().code().to_string())
            }
            None => DetectedLanguage::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_english() {
        let detector = WhatlangDetector::new();
        let detected =
            detector.detect("The quick brown fox jumps over the lazy dog near the river bank.");
        assert_eq!(detected, DetectedLanguage::English);
    }

    #[test]
    fn detects_french_as_other() {
        let detector = WhatlangDetector::new();
        let detected = detector
            .detect("Bonjour, comment allez-vous aujourd'hui? J'espère que tout va bien chez vous.");
        match detected {
            DetectedLanguage::Other(code) => assert_eq!(code, "fra"),
            other => panic!("expected Other(fra), got {other:?}"),
        }
    }

    #[test]
    fn empty_text_is_unknown() {
        let detector = WhatlangDetector::new();
        assert_eq!(detector.detect(""), DetectedLanguage::Unknown);
    }

    #[test]
    fn undetectable_text_never_reports_english() {
        let detector = WhatlangDetector::new();
        // Digits and punctuation carry no trigram signal.
        let detected = detector.detect("12345 !!! ???");
        assert!(!detected.is_english());
    }
}
