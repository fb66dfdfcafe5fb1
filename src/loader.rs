//! Document loading utilities
//!
//! `DocumentLoader` reads source text from a file or takes it from a string and hands it
//! to the scanner. Used by the CLI and by tests.
//!
//! # Example
//!
//! ```rust
//! use lexy::loader::DocumentLoader;
//!
//! let result = DocumentLoader::from_path("page.html")?.scan();
//! let result = DocumentLoader::from_string("<p>hi</p>").scan();
//! ```

use crate::analysis::AnalysisResult;
use crate::error::LexyError;
use crate::matching::{MatchRules, TagScanner};
use crate::scanning::{spans, TagSpan};
use std::fs;
use std::path::Path;

pub struct DocumentLoader {
    source: String,
}

impl DocumentLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LexyError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|err| LexyError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        Ok(DocumentLoader { source })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Scan with the built-in rules.
    pub fn scan(&self) -> AnalysisResult {
        TagScanner::new(&self.source).scan()
    }

    /// Scan with custom rules.
    pub fn scan_with(&self, rules: &MatchRules) -> AnalysisResult {
        TagScanner::with_rules(&self.source, rules).scan()
    }

    /// Every tag span of the document, unmatched.
    pub fn spans(&self) -> Vec<TagSpan> {
        spans(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_from_string() {
        let loader = DocumentLoader::from_string("<p>hi</p>");
        assert_eq!(loader.source(), "<p>hi</p>");
        assert!(loader.scan().is_clean());
        assert_eq!(loader.spans().len(), 2);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<div></span>").unwrap();
        let result = DocumentLoader::from_path(file.path()).unwrap().scan();
        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn missing_file_reports_its_path() {
        let err = DocumentLoader::from_path("/nonexistent/page.html")
            .err()
            .expect("missing file to fail");
        match err {
            LexyError::Io { path, .. } => assert_eq!(path, "/nonexistent/page.html"),
            other => panic!("unexpected error: {}", other),
        }
    }
}
