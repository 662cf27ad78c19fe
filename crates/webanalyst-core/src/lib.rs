//! Keyword relevance scoring and contextual descriptions for web pages

mod analyzer;
mod config;
mod describe;
mod filter;
mod pipeline;
mod relevance;
mod stopwords;
mod types;

pub use analyzer::{Analyzer, DocumentExtractor, DocumentSource, RetrievalError};
pub use config::{
    AnalysisConfig, ConfigError, RelevancePolicy, DEFAULT_MAX_KEYWORDS,
    DEFAULT_RELEVANCE_THRESHOLD,
};
pub use describe::describe;
pub use filter::KeywordFilter;
pub use pipeline::{rank, Pipeline};
pub use relevance::{tokenize, RelevanceEngine, TermScores};
pub use stopwords::StopWords;
pub use types::{
    parse_variables, AnalysisReport, Document, FetchedPage, KeywordAnalysis, KeywordRecord,
    RunRequest, TITLE_PLACEHOLDER,
};
