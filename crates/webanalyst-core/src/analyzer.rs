//! One analysis run: fetch, extract, score, assemble the report

use crate::config::AnalysisConfig;
use crate::pipeline::Pipeline;
use crate::types::{AnalysisReport, Document, FetchedPage, RunRequest};
use chrono::Utc;
use std::path::PathBuf;

/// Why a page could not be retrieved. Terminal for the run.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("invalid url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Retrieves raw HTML for a URL
pub trait DocumentSource {
    fn fetch(&self, url: &str) -> Result<FetchedPage, RetrievalError>;
}

/// Turns HTML into a [`Document`]. Never fails; missing parts degrade to placeholders.
pub trait DocumentExtractor {
    fn extract(&self, url: &str, html: &str) -> Document;
}

pub struct Analyzer<S, E> {
    source: S,
    extractor: E,
    config: AnalysisConfig,
}

impl<S: DocumentSource, E: DocumentExtractor> Analyzer<S, E> {
    pub fn new(source: S, extractor: E, config: AnalysisConfig) -> Self {
        Self {
            source,
            extractor,
            config,
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn run(&self, request: RunRequest) -> Result<AnalysisReport, RetrievalError> {
        let page = self.source.fetch(&request.url).inspect_err(|err| {
            tracing::warn!(url = %request.url, error = %err, "retrieval failed");
        })?;
        tracing::info!(url = %page.url, status = page.status, bytes = page.body.len(), "fetched page");

        let document = self.extractor.extract(&page.url, &page.body);
        tracing::debug!(
            meta_tags = document.meta_tags.len(),
            paragraphs = document.paragraphs.len(),
            "extracted document"
        );

        let analysis = Pipeline::new(&self.config).run(&document.paragraphs);

        Ok(AnalysisReport {
            request,
            status: page.status,
            title: document.title,
            meta_tags: document.meta_tags,
            relevant_paragraphs: analysis.relevant_paragraphs,
            keywords: analysis.keywords,
            analyzed_at: Utc::now(),
        })
    }
}
