//! Lexical scan of a quote: numeric tokens, explicit OTD amount, doc fee.
//!
//! All patterns run over the lowercased text. The "otd" label form is tried
//! before the spelled-out "out the door" form; within a form, the first
//! match in the text wins. OTD amounts may be comma-grouped (`41,000`); the
//! doc-fee amount is a plain digit run only. The two patterns are kept
//! separate on purpose.

use regex::Regex;
use std::sync::OnceLock;

static NUMBER: OnceLock<Regex> = OnceLock::new();
static OTD_LABEL: OnceLock<Regex> = OnceLock::new();
static OTD_PHRASE: OnceLock<Regex> = OnceLock::new();
static DOC_FEE: OnceLock<Regex> = OnceLock::new();

fn number_re() -> &'static Regex {
    NUMBER.get_or_init(|| Regex::new(r"\d+").unwrap())
}

fn otd_label_re() -> &'static Regex {
    OTD_LABEL.get_or_init(|| Regex::new(r"otd\s*[:$]?\s*(\d{2,3}(?:,\d{3})+|\d+)").unwrap())
}

fn otd_phrase_re() -> &'static Regex {
    OTD_PHRASE.get_or_init(|| {
        Regex::new(r"out\s*the\s*door\s*[:$]?\s*(\d{2,3}(?:,\d{3})+|\d+)").unwrap()
    })
}

fn doc_fee_re() -> &'static Regex {
    DOC_FEE.get_or_init(|| Regex::new(r"doc\s*fee\s*(\d+)").unwrap())
}

/// Everything the lexical pass pulls out of a quote
#[derive(Debug, Clone)]
pub struct QuoteScan {
    /// Lowercased input
    text: String,
    /// Every maximal digit run, in order of appearance
    pub numbers: Vec<u64>,
    /// Amount tagged with an OTD label, if any
    pub explicit_otd: Option<u64>,
    /// Amount following "doc fee"; 0 when absent
    pub doc_fee: u64,
}

impl QuoteScan {
    /// Scan raw quote text. Never fails: garbage input produces an empty
    /// scan rather than an error.
    pub fn from_text(raw: &str) -> Self {
        let text = raw.to_lowercase();

        let numbers = number_re()
            .find_iter(&text)
            .map(|m| parse_amount(m.as_str()))
            .collect();

        let explicit_otd = otd_label_re()
            .captures(&text)
            .or_else(|| otd_phrase_re().captures(&text))
            .map(|caps| parse_amount(&caps[1].replace(',', "")));

        let doc_fee = doc_fee_re()
            .captures(&text)
            .map(|caps| parse_amount(&caps[1]))
            .unwrap_or(0);

        Self {
            text,
            numbers,
            explicit_otd,
            doc_fee,
        }
    }

    /// Saturating sum of every numeric token (the naive fallback total).
    pub fn token_total(&self) -> u64 {
        self.numbers
            .iter()
            .fold(0u64, |total, n| total.saturating_add(*n))
    }

    /// True when any keyword occurs anywhere in the text. Substring match,
    /// not word-bounded: "prepared" contains "prep".
    pub fn contains_any(&self, keywords: &[String]) -> bool {
        keywords
            .iter()
            .any(|k| self.text.contains(k.to_lowercase().as_str()))
    }

    /// The normalized (lowercased) text
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Digit runs too large for u64 saturate instead of failing the scan.
fn parse_amount(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}
