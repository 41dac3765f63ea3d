//! Composes the reply a buyer can send back to the dealership

use crate::{ScrewScore, Verdict};

/// Build the message to send to the dealer, keyed by verdict severity:
/// green asks for confirmation, yellow for clarification, red for a revised
/// price with non-optional fees removed.
pub fn dealer_message(verdict: &Verdict) -> String {
    match verdict.screw_score {
        ScrewScore::Green => {
            "The quote looks reasonable. Please confirm this is the final out-the-door price."
                .to_string()
        }
        ScrewScore::Yellow => format!(
            "I reviewed the quote and had a few concerns ({}). Can you clarify or revise the out-the-door price?",
            verdict.top_issues.join(", ")
        ),
        ScrewScore::Red => format!(
            "I reviewed the quote and noticed issues ({}). Please provide an updated out-the-door price with non-optional fees removed.",
            verdict.top_issues.join(", ")
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(score: ScrewScore, issues: &[&str]) -> Verdict {
        Verdict {
            screw_score: score,
            otd: 30000,
            otd_provided: true,
            top_issues: issues.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn green_asks_for_confirmation() {
        let msg = dealer_message(&verdict(ScrewScore::Green, &[]));
        assert!(msg.contains("confirm this is the final out-the-door price"));
    }

    #[test]
    fn yellow_names_the_issues() {
        let msg = dealer_message(&verdict(
            ScrewScore::Yellow,
            &["Doc fee is higher than average"],
        ));
        assert!(msg.contains("Doc fee is higher than average"));
        assert!(msg.contains("clarify or revise"));
    }

    #[test]
    fn red_demands_revised_price() {
        let msg = dealer_message(&verdict(
            ScrewScore::Red,
            &["Doc fee is unusually high", "Dealer add-ons detected"],
        ));
        assert!(msg.contains("Doc fee is unusually high, Dealer add-ons detected"));
        assert!(msg.contains("non-optional fees removed"));
    }
}
