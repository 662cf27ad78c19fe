//! Configuration for keyword analysis

use crate::stopwords::StopWords;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Paragraph relevance threshold
pub const DEFAULT_RELEVANCE_THRESHOLD: f64 = 0.2;

/// Keyword table cap
pub const DEFAULT_MAX_KEYWORDS: usize = 20;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Errors raised while loading configuration or word lists
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// How paragraphs are marked relevant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelevancePolicy {
    /// Paragraph `i` is relevant when the `i`-th vocabulary score beats the threshold
    #[default]
    Positional,
    /// Paragraph is relevant when one of its own terms has a normalized
    /// tf-idf weight above the threshold
    TermWeight,
}

/// Analysis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Score a paragraph must exceed to be reported as relevant
    pub relevance_threshold: f64,

    /// Max keyword records, taken in vocabulary order before sorting
    pub max_keywords: usize,

    /// Paragraph selection policy
    pub relevance_policy: RelevancePolicy,

    /// HTTP timeout for the page fetch
    pub request_timeout_secs: u64,

    /// Words never reported as keywords
    pub stopwords: StopWords,
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self {
            relevance_threshold: DEFAULT_RELEVANCE_THRESHOLD,
            max_keywords: DEFAULT_MAX_KEYWORDS,
            relevance_policy: RelevancePolicy::Positional,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            stopwords: StopWords::english(),
        }
    }

    /// Load a JSON config file; missing fields keep their defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::new()
    }
}
