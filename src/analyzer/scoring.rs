//! Screw-score escalation

use super::rules::Finding;
use crate::ScrewScore;

/// Number of simultaneous findings that forces a red verdict outright.
/// Two concerns on one quote are treated as compounding risk even when each
/// alone only warrants yellow.
pub const COMPOUND_FINDING_COUNT: usize = 2;

/// Calculator for the overall screw score
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Fold rule findings into a score. Each finding raises the score to
    /// its floor (never downgrades); reaching the compound count forces red
    /// regardless of the individual floors.
    pub fn calculate(findings: &[Finding]) -> ScrewScore {
        let mut score = ScrewScore::Green;
        for finding in findings {
            score = score.raise_to(finding.floor);
        }
        if findings.len() >= COMPOUND_FINDING_COUNT {
            score = ScrewScore::Red;
        }
        score
    }

    /// One-line reading of a score for the buyer
    pub fn describe(score: ScrewScore) -> &'static str {
        match score {
            ScrewScore::Green => "Quote looks reasonable",
            ScrewScore::Yellow => "Quote has concerns worth clarifying",
            ScrewScore::Red => "Quote looks unfavorable, push back before signing",
        }
    }
}
