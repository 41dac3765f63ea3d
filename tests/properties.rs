//! Property tests for analyzer invariants.

use frontle::analyze_quote;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn analyzer_never_panics_and_caps_issues(ref input in ".{0,400}") {
        let verdict = analyze_quote(input);
        prop_assert!(verdict.top_issues.len() <= 3);
    }

    #[test]
    fn analysis_is_deterministic(ref input in ".{0,200}") {
        prop_assert_eq!(analyze_quote(input), analyze_quote(input));
    }

    #[test]
    fn ascii_case_folding_is_free(ref input in "[ -~]{0,200}") {
        prop_assert_eq!(
            analyze_quote(input),
            analyze_quote(&input.to_uppercase())
        );
    }

    #[test]
    fn issues_imply_elevated_score(ref input in ".{0,200}") {
        let verdict = analyze_quote(input);
        if verdict.top_issues.is_empty() {
            prop_assert_eq!(verdict.screw_score, frontle::ScrewScore::Green);
        } else {
            prop_assert!(verdict.screw_score >= frontle::ScrewScore::Yellow);
        }
    }
}
