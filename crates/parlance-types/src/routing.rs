//! Routing labels and decisions for the multi-model ask pipeline.
//!
//! The set of generation backends is closed: a query is always served by
//! exactly one of [`ModelLabel::Instruct`], [`ModelLabel::Polyglot`], or
//! [`ModelLabel::Chat`]. Decisions are derived per query and never stored.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of generation backends a query can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelLabel {
    /// Explanation-oriented backend: "explain ..." / "what is ..." queries.
    Instruct,
    /// Multilingual/code-leaning backend: non-English and code queries.
    Polyglot,
    /// General conversation backend: everything else.
    Chat,
}

impl ModelLabel {
    /// All labels, in routing-priority-independent declaration order.
    pub const ALL: [ModelLabel; 3] = [ModelLabel::Instruct, ModelLabel::Polyglot, ModelLabel::Chat];
}

impl fmt::Display for ModelLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelLabel::Instruct => write!(f, "instruct"),
            ModelLabel::Polyglot => write!(f, "polyglot"),
            ModelLabel::Chat => write!(f, "chat"),
        }
    }
}

impl FromStr for ModelLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "instruct" => Ok(ModelLabel::Instruct),
            "polyglot" => Ok(ModelLabel::Polyglot),
            "chat" => Ok(ModelLabel::Chat),
            other => Err(format!("invalid model label: '{other}'")),
        }
    }
}

/// Which routing rule fired for a query.
///
/// Rules are evaluated in this order; the first satisfied rule short-circuits,
/// so ties are impossible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteRule {
    /// Rule 1: detected language is not English (or detection failed).
    NonEnglish,
    /// Rule 2: query contains "code" or "programming".
    CodeKeyword,
    /// Rule 3: query contains "explain" or "what is".
    ExplainKeyword,
    /// Rule 4: no earlier rule matched.
    Default,
}

impl fmt::Display for RouteRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteRule::NonEnglish => write!(f, "non-english"),
            RouteRule::CodeKeyword => write!(f, "code keyword"),
            RouteRule::ExplainKeyword => write!(f, "explain keyword"),
            RouteRule::Default => write!(f, "default"),
        }
    }
}

/// Result of language detection over a query.
///
/// `Unknown` is the sentinel for detection failure; the router treats it the
/// same as a non-English detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "code")]
pub enum DetectedLanguage {
    English,
    Other(String),
    Unknown,
}

impl DetectedLanguage {
    /// Whether the query was confidently detected as English.
    pub fn is_english(&self) -> bool {
        matches!(self, DetectedLanguage::English)
    }
}

impl fmt::Display for DetectedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectedLanguage::English => write!(f, "en"),
            DetectedLanguage::Other(code) => write!(f, "{code}"),
            DetectedLanguage::Unknown => write!(f, "unknown"),
        }
    }
}

/// A per-query routing decision: the selected backend, the rule that fired,
/// and the detected language that informed rule 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingDecision {
    pub label: ModelLabel,
    pub rule: RouteRule,
    pub language: DetectedLanguage,
}
