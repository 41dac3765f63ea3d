//! Quote analysis engine

use super::rules::{AddonsRule, DocFeeRule, Finding, QuoteRule};
use super::scoring::ScoreCalculator;
use crate::config::AnalyzerConfig;
use crate::parser::QuoteScan;
use crate::Verdict;

/// Engine that turns raw quote text into a [`Verdict`]
///
/// Stateless apart from its configuration; a single instance can be shared
/// across threads and called concurrently.
pub struct QuoteAnalyzer {
    config: AnalyzerConfig,
    rules: Vec<Box<dyn QuoteRule + Send + Sync>>,
}

impl QuoteAnalyzer {
    /// Create an analyzer with default thresholds and keywords
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default())
    }

    /// Create an analyzer with explicit configuration
    pub fn with_config(config: AnalyzerConfig) -> Self {
        // Rule order is issue order: doc fee before add-ons.
        Self {
            config,
            rules: vec![Box::new(DocFeeRule::new()), Box::new(AddonsRule::new())],
        }
    }

    /// Analyze quote text. Total over all inputs: empty or malformed text
    /// degrades to a green, zero-total verdict rather than erroring.
    ///
    /// When the quote carries no explicit OTD label, the estimate is the
    /// sum of every number in the text, doc fee and add-on prices included.
    /// A naive total, kept for parity with the deployed heuristic.
    pub fn analyze(&self, text: &str) -> Verdict {
        let scan = QuoteScan::from_text(text);

        let (otd, otd_provided) = match scan.explicit_otd {
            Some(amount) => (amount, true),
            None => (scan.token_total(), false),
        };

        let findings: Vec<Finding> = self
            .rules
            .iter()
            .filter_map(|rule| rule.evaluate(&scan, &self.config))
            .collect();

        let screw_score = ScoreCalculator::calculate(&findings);

        let top_issues = findings
            .iter()
            .take(self.config.max_issues)
            .map(|finding| finding.issue.message().to_string())
            .collect();

        Verdict {
            screw_score,
            otd,
            otd_provided,
            top_issues,
        }
    }

}

impl Default for QuoteAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
