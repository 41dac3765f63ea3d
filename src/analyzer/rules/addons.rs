//! Dealer add-on keyword detection.
//! Keywords match as substrings of the lowercased quote, so "prepared"
//! trips the "prep" keyword. An add-on finding alone caps out at yellow.

use super::{Finding, QuoteRule};
use crate::config::AnalyzerConfig;
use crate::parser::QuoteScan;
use crate::{IssueKind, ScrewScore};

/// Rule flagging dealer add-ons named anywhere in the quote
pub struct AddonsRule;

impl AddonsRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AddonsRule {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteRule for AddonsRule {
    fn evaluate(&self, scan: &QuoteScan, config: &AnalyzerConfig) -> Option<Finding> {
        if scan.contains_any(&config.addon_keywords) {
            Some(Finding {
                issue: IssueKind::AddonsDetected,
                floor: ScrewScore::Yellow,
            })
        } else {
            None
        }
    }
}
