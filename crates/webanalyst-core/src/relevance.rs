//! Corpus-wide term importance and paragraph relevance

use crate::config::{AnalysisConfig, RelevancePolicy};
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

static TOKENIZE_RE: OnceLock<Regex> = OnceLock::new();

/// Lowercased tokens of two or more word characters
pub fn tokenize(text: &str) -> Vec<String> {
    let re = TOKENIZE_RE.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("token pattern"));
    re.find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Smoothed inverse document frequency
fn smoothed_idf(doc_count: usize, doc_freq: usize) -> f64 {
    ((doc_count + 1) as f64 / (doc_freq + 1) as f64).ln() + 1.0
}

/// Scores computed once per document
#[derive(Debug, Clone, Default)]
pub struct TermScores {
    vocabulary: Vec<String>,
    idf: Vec<f64>,
    index: HashMap<String, usize>,
    paragraph_relevance: Vec<bool>,
}

impl TermScores {
    /// Distinct terms, sorted
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// One score per vocabulary entry, same order
    pub fn scores(&self) -> &[f64] {
        &self.idf
    }

    pub fn score(&self, term: &str) -> Option<f64> {
        self.index.get(term).map(|&idx| self.idf[idx])
    }

    /// `(term, score)` pairs in vocabulary order
    pub fn terms(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.vocabulary
            .iter()
            .map(String::as_str)
            .zip(self.idf.iter().copied())
    }

    pub fn term_importance(&self) -> HashMap<&str, f64> {
        self.terms().collect()
    }

    /// One flag per input paragraph
    pub fn paragraph_relevance(&self) -> &[bool] {
        &self.paragraph_relevance
    }

    pub fn relevant_paragraphs<'p>(&self, paragraphs: &'p [String]) -> Vec<&'p str> {
        paragraphs
            .iter()
            .zip(&self.paragraph_relevance)
            .filter(|(_, &relevant)| relevant)
            .map(|(p, _)| p.as_str())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct RelevanceEngine {
    threshold: f64,
    policy: RelevancePolicy,
}

impl RelevanceEngine {
    pub fn new(threshold: f64, policy: RelevancePolicy) -> Self {
        Self { threshold, policy }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(config.relevance_threshold, config.relevance_policy)
    }

    pub fn score(&self, paragraphs: &[String]) -> TermScores {
        let doc_count = paragraphs.len();
        if doc_count == 0 {
            return TermScores::default();
        }

        let tokenized: Vec<Vec<String>> = paragraphs.iter().map(|p| tokenize(p)).collect();

        // Document frequency
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for tokens in &tokenized {
            let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for token in unique {
                *doc_freq.entry(token).or_insert(0) += 1;
            }
        }

        let mut vocabulary: Vec<String> = doc_freq.keys().map(|t| t.to_string()).collect();
        vocabulary.sort();

        let idf: Vec<f64> = vocabulary
            .iter()
            .map(|term| smoothed_idf(doc_count, doc_freq[term.as_str()]))
            .collect();

        let index: HashMap<String, usize> = vocabulary
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();

        let paragraph_relevance = match self.policy {
            RelevancePolicy::Positional => (0..doc_count)
                .map(|i| idf.get(i).is_some_and(|&score| score > self.threshold))
                .collect(),
            RelevancePolicy::TermWeight => tokenized
                .iter()
                .map(|tokens| max_normalized_weight(tokens, &index, &idf) > self.threshold)
                .collect(),
        };

        tracing::debug!(
            paragraphs = doc_count,
            vocabulary = vocabulary.len(),
            policy = ?self.policy,
            "scored corpus"
        );

        TermScores {
            vocabulary,
            idf,
            index,
            paragraph_relevance,
        }
    }
}

impl Default for RelevanceEngine {
    fn default() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }
}

/// Largest entry of the paragraph's L2-normalized tf-idf vector
fn max_normalized_weight(tokens: &[String], index: &HashMap<String, usize>, idf: &[f64]) -> f64 {
    let mut tf: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        *tf.entry(token.as_str()).or_insert(0) += 1;
    }

    let weights: Vec<f64> = tf
        .iter()
        .filter_map(|(term, &count)| index.get(*term).map(|&idx| count as f64 * idf[idx]))
        .collect();

    let norm = weights.iter().map(|w| w * w).sum::<f64>().sqrt();
    if norm == 0.0 {
        return 0.0;
    }
    weights.iter().fold(0.0f64, |max, w| max.max(w / norm))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(paragraphs: &[&str]) -> Vec<String> {
        paragraphs.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_tokenize_matches_vectorizer_defaults() {
        assert_eq!(
            tokenize("The cat, a dog & 42 pets!"),
            vec!["the", "cat", "dog", "42", "pets"]
        );
        assert_eq!(tokenize("Café déjà-vu"), vec!["café", "déjà", "vu"]);
    }

    #[test]
    fn test_tokenize_keeps_combining_marks_in_word() {
        assert_eq!(tokenize("Cafe\u{301} noir"), vec!["cafe\u{301}", "noir"]);
    }

    #[test]
    fn test_empty_corpus() {
        let scores = RelevanceEngine::default().score(&[]);
        assert!(scores.is_empty());
        assert!(scores.scores().is_empty());
        assert!(scores.paragraph_relevance().is_empty());
    }

    #[test]
    fn test_smoothed_idf() {
        let scores = RelevanceEngine::default().score(&corpus(&["rust code", "python code"]));

        assert_eq!(scores.vocabulary(), ["code", "python", "rust"]);
        assert!((scores.score("code").unwrap() - 1.0).abs() < 1e-9);
        assert!((scores.score("rust").unwrap() - (1.5f64.ln() + 1.0)).abs() < 1e-9);
        // rarer terms score higher
        assert!(scores.score("rust").unwrap() > scores.score("code").unwrap());
    }

    #[test]
    fn test_term_frequency_does_not_change_score() {
        let scores =
            RelevanceEngine::default().score(&corpus(&["echo echo echo", "delta", "other"]));
        assert_eq!(scores.score("echo"), scores.score("delta"));
    }

    #[test]
    fn test_scores_align_with_vocabulary() {
        let scores = RelevanceEngine::default().score(&corpus(&[
            "The cat sat on the mat.",
            "Cats and dogs are common pets.",
            "42 is just a number.",
        ]));

        for term in ["cat", "cats", "dogs", "pets", "42"] {
            assert!(scores.vocabulary().contains(&term.to_string()), "{term}");
        }
        assert!(!scores.vocabulary().contains(&"a".to_string()));
        for (i, term) in scores.vocabulary().iter().enumerate() {
            assert_eq!(scores.score(term), Some(scores.scores()[i]));
        }
        assert_eq!(scores.term_importance().len(), scores.vocabulary().len());
    }

    #[test]
    fn test_positional_policy_uses_vocabulary_index() {
        // vocabulary: alpha (1.0), beta (1.405), gamma (1.405)
        let engine = RelevanceEngine::new(1.2, RelevancePolicy::Positional);
        let paragraphs = corpus(&["alpha beta", "alpha gamma"]);
        let scores = engine.score(&paragraphs);

        assert_eq!(scores.paragraph_relevance(), [false, true]);
        assert_eq!(scores.relevant_paragraphs(&paragraphs), ["alpha gamma"]);
    }

    #[test]
    fn test_positional_policy_bounded_by_vocabulary() {
        let paragraphs = corpus(&["ok", "!!", "??"]);
        let scores = RelevanceEngine::default().score(&paragraphs);

        assert_eq!(scores.vocabulary(), ["ok"]);
        assert_eq!(scores.paragraph_relevance(), [true, false, false]);
    }

    #[test]
    fn test_term_weight_policy() {
        let diffuse: Vec<String> = (0..30).map(|i| format!("word{i}")).collect();
        let paragraphs = vec![diffuse.join(" "), "zeta".to_string(), "...".to_string()];
        let engine = RelevanceEngine::new(0.2, RelevancePolicy::TermWeight);
        let scores = engine.score(&paragraphs);

        // 30 equal weights normalize to ~0.18 each
        assert_eq!(scores.paragraph_relevance(), [false, true, false]);
    }
}
