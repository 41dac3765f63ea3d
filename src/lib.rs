//! Frontle: dealership quote screw-score analyzer
//!
//! This library analyzes the free text of a dealership quote and produces a
//! three-way verdict (green/yellow/red), an out-the-door price estimate, and
//! the issues that drove the score.

pub mod analyzer;
pub mod config;
pub mod parser;
pub mod reporter;
pub mod server;

use serde::{Deserialize, Serialize};

/// Severity verdict for a quote, ordered green < yellow < red
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrewScore {
    Green,
    Yellow,
    Red,
}

impl ScrewScore {
    /// Raise the score to at least `floor`. Never downgrades.
    pub fn raise_to(self, floor: ScrewScore) -> ScrewScore {
        self.max(floor)
    }
}

impl std::fmt::Display for ScrewScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScrewScore::Green => write!(f, "green"),
            ScrewScore::Yellow => write!(f, "yellow"),
            ScrewScore::Red => write!(f, "red"),
        }
    }
}

/// An issue the analyzer can flag on a quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueKind {
    /// Doc fee at or above the excessive threshold
    DocFeeExcessive,
    /// Doc fee at or above the elevated threshold (but below excessive)
    DocFeeElevated,
    /// At least one dealer add-on keyword present
    AddonsDetected,
}

impl IssueKind {
    /// The user-facing message for this issue
    pub fn message(&self) -> &'static str {
        match self {
            IssueKind::DocFeeExcessive => "Doc fee is unusually high",
            IssueKind::DocFeeElevated => "Doc fee is higher than average",
            IssueKind::AddonsDetected => "Dealer add-ons detected",
        }
    }
}

/// The result of analyzing a quote
///
/// Derived purely from the input text; identical input always yields an
/// identical verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    /// Overall screw score
    pub screw_score: ScrewScore,
    /// Out-the-door price: the labeled amount when present, otherwise a
    /// naive sum of every number in the quote
    pub otd: u64,
    /// True when the quote carried an explicit OTD label
    pub otd_provided: bool,
    /// Up to three issue messages, in detection order
    pub top_issues: Vec<String>,
}

/// Public API: analyze quote text with the default configuration.
///
/// Total over all inputs; empty or garbage text yields a green, zero-total
/// verdict rather than an error.
pub fn analyze_quote(text: &str) -> Verdict {
    analyzer::QuoteAnalyzer::new().analyze(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screw_score_ordering() {
        assert!(ScrewScore::Green < ScrewScore::Yellow);
        assert!(ScrewScore::Yellow < ScrewScore::Red);
    }

    #[test]
    fn raise_to_never_downgrades() {
        assert_eq!(
            ScrewScore::Red.raise_to(ScrewScore::Yellow),
            ScrewScore::Red
        );
        assert_eq!(
            ScrewScore::Green.raise_to(ScrewScore::Yellow),
            ScrewScore::Yellow
        );
        assert_eq!(
            ScrewScore::Yellow.raise_to(ScrewScore::Yellow),
            ScrewScore::Yellow
        );
    }

    #[test]
    fn screw_score_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ScrewScore::Yellow).unwrap(),
            "\"yellow\""
        );
    }

    #[test]
    fn verdict_uses_camel_case_wire_names() {
        let verdict = Verdict {
            screw_score: ScrewScore::Green,
            otd: 0,
            otd_provided: false,
            top_issues: vec![],
        };
        let json = serde_json::to_value(&verdict).unwrap();
        assert!(json.get("screwScore").is_some());
        assert!(json.get("otdProvided").is_some());
        assert!(json.get("topIssues").is_some());
        assert!(json.get("otd").is_some());
    }
}
