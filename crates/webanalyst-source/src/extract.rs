//! HTML extraction built on `scraper`.

use scraper::{Html, Selector};
use webanalyst_core::{Document, DocumentExtractor, TITLE_PLACEHOLDER};

/// Pulls the title, meta tags and paragraph texts out of an HTML page.
#[derive(Clone)]
pub struct HtmlExtractor {
    title: Selector,
    meta: Selector,
    paragraph: Selector,
}

impl HtmlExtractor {
    pub fn new() -> Self {
        Self {
            title: Selector::parse("title").expect("title selector"),
            meta: Selector::parse("meta").expect("meta selector"),
            paragraph: Selector::parse("p").expect("paragraph selector"),
        }
    }
}

impl Default for HtmlExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentExtractor for HtmlExtractor {
    fn extract(&self, url: &str, html: &str) -> Document {
        let document = Html::parse_document(html);

        let title = document
            .select(&self.title)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| TITLE_PLACEHOLDER.to_string());

        let meta_tags = document
            .select(&self.meta)
            .map(|el| {
                let attr = |name: &str| el.value().attr(name).unwrap_or_default().to_string();
                (attr("name"), attr("content"))
            })
            .collect();

        // Text nodes are joined verbatim, like a DOM `textContent`
        let paragraphs = document
            .select(&self.paragraph)
            .map(|el| el.text().collect::<String>())
            .collect();

        Document {
            url: url.to_string(),
            title,
            meta_tags,
            paragraphs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<!doctype html>
<html>
<head>
  <title> Pet Guide </title>
  <meta charset="utf-8">
  <meta name="description" content="All about pets">
  <meta name="keywords" content="cats,dogs">
</head>
<body>
  <p>The cat sat on the <b>mat</b>.</p>
  <div><p>Cats and dogs are common pets.</p></div>
  <p></p>
</body>
</html>"#;

    #[test]
    fn test_extracts_title() {
        let doc = HtmlExtractor::new().extract("https://pets.example", PAGE);
        assert_eq!(doc.title, "Pet Guide");
        assert_eq!(doc.url, "https://pets.example");
    }

    #[test]
    fn test_missing_title_uses_placeholder() {
        let doc = HtmlExtractor::new().extract("u", "<html><body><p>x</p></body></html>");
        assert_eq!(doc.title, TITLE_PLACEHOLDER);

        let doc = HtmlExtractor::new().extract("u", "<title>  </title><p>x</p>");
        assert_eq!(doc.title, TITLE_PLACEHOLDER);
    }

    #[test]
    fn test_meta_tags_in_order() {
        let doc = HtmlExtractor::new().extract("u", PAGE);
        assert_eq!(
            doc.meta_tags,
            vec![
                (String::new(), String::new()),
                ("description".to_string(), "All about pets".to_string()),
                ("keywords".to_string(), "cats,dogs".to_string()),
            ]
        );
    }

    #[test]
    fn test_paragraphs_in_document_order() {
        let doc = HtmlExtractor::new().extract("u", PAGE);
        assert_eq!(
            doc.paragraphs,
            vec![
                "The cat sat on the mat.".to_string(),
                "Cats and dogs are common pets.".to_string(),
                String::new(),
            ]
        );
    }

    #[test]
    fn test_empty_html() {
        let doc = HtmlExtractor::new().extract("u", "");
        assert_eq!(doc.title, TITLE_PLACEHOLDER);
        assert!(doc.meta_tags.is_empty());
        assert!(doc.paragraphs.is_empty());
    }
}
