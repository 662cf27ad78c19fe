//! Keyword descriptions drawn from the page text

use unicode_segmentation::UnicodeSegmentation;

/// First sentence mentioning `term`, from the first paragraph that contains it.
///
/// Matching is case-insensitive substring containment. Returns an empty
/// string when no paragraph mentions the term.
pub fn describe(term: &str, paragraphs: &[String]) -> String {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return String::new();
    }

    for paragraph in paragraphs {
        if !paragraph.to_lowercase().contains(&needle) {
            continue;
        }
        if let Some(sentence) = paragraph
            .unicode_sentences()
            .find(|s| s.to_lowercase().contains(&needle))
        {
            return sentence.trim().to_string();
        }
    }

    String::new()
}
