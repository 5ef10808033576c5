//! Rule-based query routing.
//!
//! Selects exactly one generation backend per query using ordered rule
//! evaluation with first-match-wins semantics. No scoring, no confidence
//! threshold; ties are impossible because the first satisfied rule
//! short-circuits.
//!
//! Matching is literal substring matching, case-insensitive. "Write me a
//! Python function" contains neither "code" nor "programming" and falls
//! through to the default backend; that fragility is intentional and pinned
//! by tests.

use tracing::debug;

use parlance_types::routing::{ModelLabel, RouteRule, RoutingDecision};

use super::detect::LanguageDetector;

/// Rule 2 keywords: route to the polyglot backend.
const CODE_KEYWORDS: &[&str] = &["code", "programming"];

/// Rule 3 keywords: route to the instruct backend.
const EXPLAIN_KEYWORDS: &[&str] = &["explain", "what is"];

/// Routes queries to generation backends by language and keywords.
pub struct QueryRouter<D: LanguageDetector> {
    detector: D,
}

impl<D: LanguageDetector> QueryRouter<D> {
    /// Create a new router over the given language detector.
    pub fn new(detector: D) -> Self {
        Self { detector }
    }

    /// Select the backend for one query.
    ///
    /// Rule order:
    /// 1. not English (or detection failed) -> Polyglot
    /// 2. contains "code" or "programming"  -> Polyglot
    /// 3. contains "explain" or "what is"   -> Instruct
    /// 4. otherwise                         -> Chat
    pub fn route(&self, query: &str) -> RoutingDecision {
        let language = self.detector.detect(query);

        let (label, rule) = if !language.is_english() {
            (ModelLabel::Polyglot, RouteRule::NonEnglish)
        } else {
            let lower = query.to_lowercase();
            if CODE_KEYWORDS.iter().any(|k| lower.contains(k)) {
                (ModelLabel::Polyglot, RouteRule::CodeKeyword)
            } else if EXPLAIN_KEYWORDS.iter().any(|k| lower.contains(k)) {
                (ModelLabel::Instruct, RouteRule::ExplainKeyword)
            } else {
                (ModelLabel::Chat, RouteRule::Default)
            }
        };

        debug!(%label, %rule, %language, "query routed");
        RoutingDecision {
            label,
            rule,
            language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parlance_types::routing::DetectedLanguage;

    /// Detector with a canned answer, so rule order is tested in isolation.
    struct FixedDetector(DetectedLanguage);

    impl LanguageDetector for FixedDetector {
        fn detect(&self, _text: &str) -> DetectedLanguage {
            self.0.clone()
        }
    }

    fn english_router() -> QueryRouter<FixedDetector> {
        QueryRouter::new(FixedDetector(DetectedLanguage::English))
    }

    #[test]
    fn non_english_routes_to_polyglot() {
        let router = QueryRouter::new(FixedDetector(DetectedLanguage::Other("fra".to_string())));
        let decision = router.route("Comment ça va?");
        assert_eq!(decision.label, ModelLabel::Polyglot);
        assert_eq!(decision.rule, RouteRule::NonEnglish);
    }

    #[test]
    fn detection_failure_routes_to_polyglot() {
        let router = QueryRouter::new(FixedDetector(DetectedLanguage::Unknown));
        let decision = router.route("???");
        assert_eq!(decision.label, ModelLabel::Polyglot);
        assert_eq!(decision.rule, RouteRule::NonEnglish);
    }

    #[test]
    fn code_keyword_routes_to_polyglot() {
        let decision = english_router().route("review this CODE for me");
        assert_eq!(decision.label, ModelLabel::Polyglot);
        assert_eq!(decision.rule, RouteRule::CodeKeyword);

        let decision = english_router().route("is programming hard?");
        assert_eq!(decision.label, ModelLabel::Polyglot);
        assert_eq!(decision.rule, RouteRule::CodeKeyword);
    }

    #[test]
    fn explain_keyword_routes_to_instruct() {
        let decision = english_router().route("What is normalization?");
        assert_eq!(decision.label, ModelLabel::Instruct);
        assert_eq!(decision.rule, RouteRule::ExplainKeyword);

        let decision = english_router().route("please EXPLAIN joins");
        assert_eq!(decision.label, ModelLabel::Instruct);
    }

    #[test]
    fn code_rule_wins_over_explain_rule() {
        // Contains both "code" and "explain"; rule 2 fires first.
        let decision = english_router().route("explain this code");
        assert_eq!(decision.label, ModelLabel::Polyglot);
        assert_eq!(decision.rule, RouteRule::CodeKeyword);
    }

    #[test]
    fn non_english_rule_wins_over_keywords() {
        let router = QueryRouter::new(FixedDetector(DetectedLanguage::Other("deu".to_string())));
        let decision = router.route("explain the code");
        assert_eq!(decision.label, ModelLabel::Polyglot);
        assert_eq!(decision.rule, RouteRule::NonEnglish);
    }

    #[test]
    fn everything_else_routes_to_chat() {
        let decision = english_router().route("tell me a story about a lighthouse");
        assert_eq!(decision.label, ModelLabel::Chat);
        assert_eq!(decision.rule, RouteRule::Default);
    }

    #[test]
    fn substring_matching_is_literal_not_semantic() {
        // "Write me a Python function" is a programming request, but contains
        // neither "code" nor "programming" as a literal substring.
        let decision = english_router().route("Write me a Python function");
        assert_eq!(decision.label, ModelLabel::Chat);
        assert_eq!(decision.rule, RouteRule::Default);
    }
}
