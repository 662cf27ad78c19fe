//! Keyword filtering: stopwords and numeric tokens

use crate::stopwords::StopWords;

#[derive(Debug, Clone, Copy)]
pub struct KeywordFilter<'a> {
    stopwords: &'a StopWords,
}

impl<'a> KeywordFilter<'a> {
    pub fn new(stopwords: &'a StopWords) -> Self {
        Self { stopwords }
    }

    /// True when `term` may be reported as a keyword
    pub fn keep(&self, term: &str) -> bool {
        !self.stopwords.contains(term) && !is_all_digits(term)
    }

    /// Surviving terms, original order preserved
    pub fn filter<'t>(&self, vocabulary: &'t [String]) -> Vec<&'t str> {
        vocabulary
            .iter()
            .map(String::as_str)
            .filter(|term| self.keep(term))
            .collect()
    }
}

fn is_all_digits(term: &str) -> bool {
    !term.is_empty() && term.chars().all(char::is_numeric)
}
