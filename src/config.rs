//! Run configuration.
//!
//! The binary takes no arguments; everything comes from `ScrapeConfig::default()`.

use std::path::PathBuf;
use std::time::Duration;

/// Browser-like identification sent with every page request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

pub const DEFAULT_INPUT_PATH: &str = "data/Labels.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "data/Artists.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeConfig {
    /// Directive table (one row per label)
    pub input_path: PathBuf,
    /// Wide CSV written at the end of the run
    pub output_path: PathBuf,
    pub user_agent: String,
    /// `None` leaves the HTTP client's own default in place
    pub timeout: Option<Duration>,
    /// Max response body in bytes; `None` reads pages of any size
    pub body_limit: Option<u64>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
            body_limit: None,
        }
    }
}

impl ScrapeConfig {
    pub fn with_paths(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input.into(),
            output_path: output.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScrapeConfig::default();
        assert_eq!(config.input_path, PathBuf::from("data/Labels.csv"));
        assert_eq!(config.output_path, PathBuf::from("data/Artists.csv"));
        assert!(config.user_agent.starts_with("Mozilla/5.0"));
        assert_eq!(config.timeout, None);
        assert_eq!(config.body_limit, None);
    }

    #[test]
    fn test_with_paths_keeps_agent() {
        let config = ScrapeConfig::with_paths("in.csv", "out/names.csv");
        assert_eq!(config.input_path, PathBuf::from("in.csv"));
        assert_eq!(config.output_path, PathBuf::from("out/names.csv"));
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }
}
