//! Console reporter with colored output

use crate::analyzer::ScoreCalculator;
use crate::{ScrewScore, Verdict};
use colored::Colorize;

/// Reporter for terminal output
pub struct ConsoleReporter {
    /// Whether to use colors
    use_colors: bool,
}

impl ConsoleReporter {
    /// Create a new console reporter
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// Disable colors
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Report a verdict to stdout
    pub fn report(&self, verdict: &Verdict) {
        print!("{}", self.render(verdict));
    }

    /// One-line form for quiet mode
    pub fn report_quiet(&self, verdict: &Verdict) {
        println!("{}", self.render_quiet(verdict));
    }

    fn render(&self, verdict: &Verdict) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Verdict: {}\n",
            self.score_label(verdict.screw_score)
        ));
        out.push_str(&format!("{}: ${}\n", otd_label(verdict), verdict.otd));
        for issue in &verdict.top_issues {
            out.push_str(&format!("  • {}\n", issue));
        }
        out.push_str(&format!(
            "{}\n",
            ScoreCalculator::describe(verdict.screw_score)
        ));
        out
    }

    fn render_quiet(&self, verdict: &Verdict) -> String {
        format!(
            "{} ${} ({} issues)",
            verdict.screw_score,
            verdict.otd,
            verdict.top_issues.len()
        )
    }

    fn score_label(&self, score: ScrewScore) -> String {
        let label = score.to_string().to_uppercase();
        if !self.use_colors {
            return label;
        }
        match score {
            ScrewScore::Green => label.as_str().green().bold().to_string(),
            ScrewScore::Yellow => label.as_str().yellow().bold().to_string(),
            ScrewScore::Red => label.as_str().red().bold().to_string(),
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Display label for the OTD line: estimates are marked as such
fn otd_label(verdict: &Verdict) -> &'static str {
    if verdict.otd_provided {
        "OTD"
    } else {
        "Estimated OTD"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(otd_provided: bool) -> Verdict {
        Verdict {
            screw_score: ScrewScore::Yellow,
            otd: 41000,
            otd_provided,
            top_issues: vec!["Doc fee is higher than average".to_string()],
        }
    }

    #[test]
    fn estimate_is_labeled() {
        let reporter = ConsoleReporter::new().without_colors();
        let out = reporter.render(&verdict(false));
        assert!(out.contains("Estimated OTD: $41000"));
    }

    #[test]
    fn provided_otd_not_labeled_estimated() {
        let reporter = ConsoleReporter::new().without_colors();
        let out = reporter.render(&verdict(true));
        assert!(out.contains("OTD: $41000"));
        assert!(!out.contains("Estimated"));
    }

    #[test]
    fn issues_rendered_as_bullets() {
        let reporter = ConsoleReporter::new().without_colors();
        let out = reporter.render(&verdict(false));
        assert!(out.contains("• Doc fee is higher than average"));
    }

    #[test]
    fn plain_label_without_colors() {
        let reporter = ConsoleReporter::new().without_colors();
        let out = reporter.render(&verdict(false));
        assert!(out.contains("Verdict: YELLOW"));
    }

    #[test]
    fn quiet_line_is_single_line() {
        let reporter = ConsoleReporter::new().without_colors();
        let out = reporter.render_quiet(&verdict(false));
        assert_eq!(out, "yellow $41000 (1 issues)");
    }
}
