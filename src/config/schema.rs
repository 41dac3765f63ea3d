//! Config schema, defaults, and validation

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Doc fee at or above this is flagged as higher than average (inclusive)
pub const DEFAULT_DOC_FEE_ELEVATED: u64 = 401;

/// Doc fee at or above this is flagged as unusually high (inclusive)
pub const DEFAULT_DOC_FEE_EXCESSIVE: u64 = 800;

/// Cap on issues surfaced in a verdict
pub const DEFAULT_MAX_ISSUES: usize = 3;

/// Dealer add-on keywords flagged by default. Matched as substrings of the
/// lowercased quote, not whole words.
pub const DEFAULT_ADDON_KEYWORDS: &[&str] =
    &["nitrogen", "protection", "etch", "prep", "package"];

/// Root config structure for .frontlerc.json
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalyzerConfig {
    /// Threshold for the "higher than average" doc-fee issue
    pub doc_fee_elevated: u64,

    /// Threshold for the "unusually high" doc-fee issue
    pub doc_fee_excessive: u64,

    /// Add-on keywords (substring match against the lowercased quote)
    pub addon_keywords: Vec<String>,

    /// Maximum number of issues surfaced in a verdict
    pub max_issues: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            doc_fee_elevated: DEFAULT_DOC_FEE_ELEVATED,
            doc_fee_excessive: DEFAULT_DOC_FEE_EXCESSIVE,
            addon_keywords: DEFAULT_ADDON_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
            max_issues: DEFAULT_MAX_ISSUES,
        }
    }
}

impl AnalyzerConfig {
    /// Check threshold ordering and normalize keywords to lowercase.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        if self.doc_fee_excessive < self.doc_fee_elevated {
            return Err(ConfigError::ThresholdOrder {
                elevated: self.doc_fee_elevated,
                excessive: self.doc_fee_excessive,
            });
        }
        for keyword in &mut self.addon_keywords {
            *keyword = keyword.to_lowercase();
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_deployed_thresholds() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.doc_fee_elevated, 401);
        assert_eq!(config.doc_fee_excessive, 800);
        assert_eq!(config.max_issues, 3);
        assert_eq!(config.addon_keywords.len(), 5);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: AnalyzerConfig = serde_json::from_str(r#"{"docFeeElevated": 300}"#).unwrap();
        assert_eq!(config.doc_fee_elevated, 300);
        assert_eq!(config.doc_fee_excessive, DEFAULT_DOC_FEE_EXCESSIVE);
        assert_eq!(config.max_issues, DEFAULT_MAX_ISSUES);
    }

    #[test]
    fn validate_rejects_inverted_thresholds() {
        let config = AnalyzerConfig {
            doc_fee_elevated: 900,
            doc_fee_excessive: 800,
            ..AnalyzerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_lowercases_keywords() {
        let config = AnalyzerConfig {
            addon_keywords: vec!["Nitrogen".to_string(), "ETCH".to_string()],
            ..AnalyzerConfig::default()
        };
        let config = config.validate().unwrap();
        assert_eq!(config.addon_keywords, vec!["nitrogen", "etch"]);
    }
}
