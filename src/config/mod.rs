//! Configuration loading for Frontle

mod schema;

pub use schema::{
    AnalyzerConfig, DEFAULT_ADDON_KEYWORDS, DEFAULT_DOC_FEE_ELEVATED, DEFAULT_DOC_FEE_EXCESSIVE,
    DEFAULT_MAX_ISSUES,
};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_FILENAME: &str = ".frontlerc.json";

/// Errors raised while loading a config file. The analyzer itself never
/// errors; these surface only at the CLI/server boundary.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read config {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in config {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("docFeeExcessive ({excessive}) must not be below docFeeElevated ({elevated})")]
    ThresholdOrder { elevated: u64, excessive: u64 },
}

/// Find and load the config file. Searches `work_dir` then its parents for
/// [`CONFIG_FILENAME`]; a missing file means defaults. An explicit
/// `custom_path` must exist.
pub fn load_config(
    work_dir: &Path,
    custom_path: Option<&Path>,
) -> Result<AnalyzerConfig, ConfigError> {
    let path = if let Some(p) = custom_path {
        let path = if p.is_absolute() {
            p.to_path_buf()
        } else {
            work_dir.join(p)
        };
        if !path.exists() {
            return Err(ConfigError::NotFound(path));
        }
        Some(path)
    } else {
        find_config_in_parents(work_dir)
    };

    match path {
        Some(path) => {
            let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
                path: path.clone(),
                source,
            })?;
            let config: AnalyzerConfig =
                serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                    path: path.clone(),
                    source,
                })?;
            config.validate()
        }
        None => Ok(AnalyzerConfig::default()),
    }
}

/// Search for the config file in a directory and its parents
fn find_config_in_parents(mut dir: &Path) -> Option<PathBuf> {
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

/// Serialized default config, written by `frontle init`
pub fn default_config_json() -> String {
    serde_json::to_string_pretty(&AnalyzerConfig::default())
        .unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_config_yields_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = load_config(dir.path(), None).unwrap();
        assert_eq!(config.doc_fee_excessive, DEFAULT_DOC_FEE_EXCESSIVE);
    }

    #[test]
    fn config_found_in_parent_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let child = dir.path().join("nested");
        fs::create_dir(&child).unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"docFeeExcessive": 1000}"#,
        )
        .unwrap();

        let config = load_config(&child, None).unwrap();
        assert_eq!(config.doc_fee_excessive, 1000);
    }

    #[test]
    fn explicit_path_must_exist() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = load_config(dir.path(), Some(Path::new("missing.json")));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        file.flush().unwrap();

        let result = load_config(Path::new("."), Some(file.path()));
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn default_config_json_round_trips() {
        let json = default_config_json();
        let config: AnalyzerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.doc_fee_elevated, DEFAULT_DOC_FEE_ELEVATED);
        assert!(json.contains("docFeeExcessive"));
        assert!(json.contains("addonKeywords"));
    }
}
