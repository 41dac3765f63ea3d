//! Scoring rules applied to a scanned quote

pub mod addons;
pub mod doc_fee;

pub use addons::AddonsRule;
pub use doc_fee::DocFeeRule;

use crate::config::AnalyzerConfig;
use crate::parser::QuoteScan;
use crate::{IssueKind, ScrewScore};

/// A single issue raised by a rule, paired with the least severity the
/// verdict must carry once the issue is recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finding {
    pub issue: IssueKind,
    pub floor: ScrewScore,
}

/// Trait for quote scoring rules. Rules run in a fixed order and raise at
/// most one finding each; issue order in the verdict is rule order.
pub trait QuoteRule {
    /// Evaluate the scanned quote, returning a finding when flagged
    fn evaluate(&self, scan: &QuoteScan, config: &AnalyzerConfig) -> Option<Finding>;
}
