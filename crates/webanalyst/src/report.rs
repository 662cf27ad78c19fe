//! Text and JSON rendering of an analysis report

use webanalyst_core::{AnalysisReport, KeywordRecord};

const KEYWORD_HEADER: &str = "Keyword";
const SCORE_HEADER: &str = "Score";
const DESCRIPTION_HEADER: &str = "Description";

pub fn render_text(report: &AnalysisReport) -> String {
    let mut sections = Vec::new();

    // Section 1: Run context
    sections.push(format!(
        "Website analysis: {}\n\
         Content type of interest: {}\n\
         Variables of interest: {}\n\
         Page status: {}\n\
         Page title: {}\n\
         Analyzed at: {}",
        report.request.url,
        report.request.content_type,
        report.request.variables.join(", "),
        report.status,
        report.title,
        report.analyzed_at.to_rfc3339(),
    ));

    // Section 2: Meta tags
    let meta: Vec<String> = report
        .meta_tags
        .iter()
        .map(|(name, content)| format!("{name}: {content}"))
        .collect();
    sections.push(format!("\nMeta tags:\n{}", meta.join("\n")));

    // Section 3: Relevant paragraphs
    sections.push(format!(
        "\nRelevant content:\n{}",
        report.relevant_paragraphs.join("\n")
    ));

    // Section 4: Keyword table
    sections.push(format!(
        "\nDetected keywords (TF-IDF):\n\n{}",
        keyword_table(&report.keywords)
    ));

    sections.join("\n")
}

pub fn render_json(report: &AnalysisReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Three aligned columns, rows in the order given
fn keyword_table(keywords: &[KeywordRecord]) -> String {
    if keywords.is_empty() {
        return "No keywords found.".to_string();
    }

    let scores: Vec<String> = keywords.iter().map(|k| format!("{:.6}", k.score)).collect();
    let term_width = keywords
        .iter()
        .map(|k| k.term.chars().count())
        .chain([KEYWORD_HEADER.len()])
        .max()
        .unwrap_or_default();
    let score_width = scores
        .iter()
        .map(String::len)
        .chain([SCORE_HEADER.len()])
        .max()
        .unwrap_or_default();

    let row = |term: &str, score: &str, description: &str| {
        format!("{term:<term_width$}  {score:>score_width$}  {description}")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![row(KEYWORD_HEADER, SCORE_HEADER, DESCRIPTION_HEADER)];
    lines.extend(
        keywords
            .iter()
            .zip(&scores)
            .map(|(k, score)| row(&k.term, score, &k.description)),
    );
    lines.join("\n")
}
