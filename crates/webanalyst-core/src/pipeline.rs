//! Scoring pipeline: relevance, filtering, descriptions, ranking

use crate::config::AnalysisConfig;
use crate::describe::describe;
use crate::filter::KeywordFilter;
use crate::relevance::RelevanceEngine;
use crate::types::{KeywordAnalysis, KeywordRecord};
use std::cmp::Ordering;

#[derive(Debug)]
pub struct Pipeline<'c> {
    config: &'c AnalysisConfig,
    engine: RelevanceEngine,
}

impl<'c> Pipeline<'c> {
    pub fn new(config: &'c AnalysisConfig) -> Self {
        Self {
            config,
            engine: RelevanceEngine::from_config(config),
        }
    }

    pub fn run(&self, paragraphs: &[String]) -> KeywordAnalysis {
        let scores = self.engine.score(paragraphs);

        let relevant_paragraphs: Vec<String> = scores
            .relevant_paragraphs(paragraphs)
            .into_iter()
            .map(str::to_string)
            .collect();

        let filter = KeywordFilter::new(&self.config.stopwords);
        let filtered: Vec<(&str, f64)> = scores.terms().filter(|(t, _)| filter.keep(t)).collect();

        let mut keywords: Vec<KeywordRecord> = filtered
            .iter()
            .take(self.config.max_keywords)
            .map(|&(term, score)| KeywordRecord {
                term: term.to_string(),
                score,
                description: describe(term, paragraphs),
            })
            .collect();
        rank(&mut keywords);

        tracing::debug!(
            vocabulary = scores.vocabulary().len(),
            filtered = filtered.len(),
            keywords = keywords.len(),
            relevant = relevant_paragraphs.len(),
            "pipeline finished"
        );

        KeywordAnalysis {
            relevant_paragraphs,
            keywords,
            vocabulary_size: scores.vocabulary().len(),
            filtered_size: filtered.len(),
        }
    }
}

/// Stable sort by descending score
pub fn rank(keywords: &mut [KeywordRecord]) {
    keywords.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}
