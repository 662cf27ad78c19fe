//! Saved HTML on disk as a document source

use std::path::PathBuf;
use webanalyst_core::{DocumentSource, FetchedPage, RetrievalError};

/// Reads a local HTML file regardless of the requested URL
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSource for FileSource {
    fn fetch(&self, url: &str) -> Result<FetchedPage, RetrievalError> {
        let bytes = std::fs::read(&self.path).map_err(|source| RetrievalError::Io {
            path: self.path.clone(),
            source,
        })?;
        let body = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), "lossy utf-8 decoding");
                String::from_utf8_lossy(err.as_bytes()).into_owned()
            }
        };

        Ok(FetchedPage {
            url: url.to_string(),
            status: 200,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        std::fs::write(&path, "<p>hello</p>").unwrap();

        let page = FileSource::new(&path).fetch("file-page").unwrap();
        assert_eq!(page.status, 200);
        assert_eq!(page.url, "file-page");
        assert_eq!(page.body, "<p>hello</p>");
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.html");
        std::fs::write(&path, b"<p>caf\xe9</p>").unwrap();

        let page = FileSource::new(&path).fetch("x").unwrap();
        assert!(page.body.starts_with("<p>caf"));
        assert!(page.body.contains('\u{FFFD}'));
    }

    #[test]
    fn test_missing_file() {
        let result = FileSource::new("/nonexistent/page.html").fetch("x");
        assert!(matches!(result, Err(RetrievalError::Io { .. })));
    }
}
