//! Documentation-fee thresholds.
//! Both bounds are inclusive: 800 is excessive, 401 is elevated, 400 and
//! below is clean (at default thresholds).

use super::{Finding, QuoteRule};
use crate::config::AnalyzerConfig;
use crate::parser::QuoteScan;
use crate::{IssueKind, ScrewScore};

/// Rule flagging documentation fees above the configured thresholds
pub struct DocFeeRule;

impl DocFeeRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DocFeeRule {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteRule for DocFeeRule {
    fn evaluate(&self, scan: &QuoteScan, config: &AnalyzerConfig) -> Option<Finding> {
        if scan.doc_fee >= config.doc_fee_excessive {
            Some(Finding {
                issue: IssueKind::DocFeeExcessive,
                floor: ScrewScore::Red,
            })
        } else if scan.doc_fee >= config.doc_fee_elevated {
            Some(Finding {
                issue: IssueKind::DocFeeElevated,
                floor: ScrewScore::Yellow,
            })
        } else {
            None
        }
    }
}
