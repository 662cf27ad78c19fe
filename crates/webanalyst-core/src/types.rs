//! Core types for page analysis

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Title used when a page has none
pub const TITLE_PLACEHOLDER: &str = "No title found";

/// Raw page as returned by a document source
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub url: String,
    pub status: u16,
    pub body: String,
}

/// Structured content extracted from a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub url: String,
    pub title: String,
    /// `(name, content)` pairs in document order
    pub meta_tags: Vec<(String, String)>,
    /// Paragraph texts in document order
    pub paragraphs: Vec<String>,
}

/// What the analyst asked for. Passed through to the report untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRequest {
    pub url: String,
    pub content_type: String,
    pub variables: Vec<String>,
}

impl RunRequest {
    pub fn new(url: impl Into<String>, content_type: impl Into<String>, variables: &str) -> Self {
        Self {
            url: url.into(),
            content_type: content_type.into(),
            variables: parse_variables(variables),
        }
    }
}

/// Split a comma-separated variable list, dropping empty entries
pub fn parse_variables(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

/// A reported keyword
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRecord {
    pub term: String,
    pub score: f64,
    /// First sentence mentioning the term, empty when none was found
    pub description: String,
}

/// Output of the scoring pipeline for one document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    pub relevant_paragraphs: Vec<String>,
    /// Sorted by descending score
    pub keywords: Vec<KeywordRecord>,
    pub vocabulary_size: usize,
    pub filtered_size: usize,
}

/// Everything handed to the reporter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub request: RunRequest,
    pub status: u16,
    pub title: String,
    pub meta_tags: Vec<(String, String)>,
    pub relevant_paragraphs: Vec<String>,
    pub keywords: Vec<KeywordRecord>,
    pub analyzed_at: DateTime<Utc>,
}
