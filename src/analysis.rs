//! Scan results
//!
//! Structural defects are data, not faults: a scan always produces an [`AnalysisResult`]
//! holding the error records in discovery order and the structure tree.

use crate::scanning::TagSpan;
use crate::structure::StructureTree;
use serde::Serialize;
use std::fmt;

/// The two structural defect kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// A closing tag with no matching open tag at the time it was met
    Unopened,
    /// An opening tag still unmatched at the end of the document
    Unclosed,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Unopened => write!(f, "Unopened"),
            ErrorKind::Unclosed => write!(f, "Unclosed"),
        }
    }
}

/// One reported defect: the offending span plus its classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorRecord {
    #[serde(flatten)]
    pub span: TagSpan,
    pub error: ErrorKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    /// Tag name the hint points at
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ErrorRecord {
    pub fn unopened(span: TagSpan) -> Self {
        ErrorRecord {
            span,
            error: ErrorKind::Unopened,
            hint: None,
            suggestion: None,
        }
    }

    pub fn unclosed(span: TagSpan) -> Self {
        ErrorRecord {
            span,
            error: ErrorKind::Unclosed,
            hint: None,
            suggestion: None,
        }
    }

    /// Attach a misspelling hint pointing at `tag`.
    pub fn with_suggestion(mut self, tag: &str) -> Self {
        self.hint = Some(misspelling_hint(tag));
        self.suggestion = Some(tag.to_string());
        self
    }

    pub fn tag(&self) -> &str {
        &self.span.tag
    }
}

pub fn misspelling_hint(tag: &str) -> String {
    format!("Possible misspelled tag: {}", tag)
}

/// Output of one scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    /// `Unopened` records in document order, then `Unclosed` records in open order
    pub errors: Vec<ErrorRecord>,
    pub structure: StructureTree,
    /// Closing tags whose path pop did not line up with the tag they closed
    pub path_desyncs: usize,
}

impl AnalysisResult {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn unopened(&self) -> impl Iterator<Item = &ErrorRecord> {
        self.of_kind(ErrorKind::Unopened)
    }

    pub fn unclosed(&self) -> impl Iterator<Item = &ErrorRecord> {
        self.of_kind(ErrorKind::Unclosed)
    }

    fn of_kind(&self, kind: ErrorKind) -> impl Iterator<Item = &ErrorRecord> {
        self.errors.iter().filter(move |record| record.error == kind)
    }

    pub fn summary(&self) -> Summary {
        Summary {
            unopened: self.unopened().count(),
            unclosed: self.unclosed().count(),
            hinted: self.errors.iter().filter(|r| r.hint.is_some()).count(),
            nodes: self.structure.node_count(),
        }
    }
}

/// Error counts for one scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub unopened: usize,
    pub unclosed: usize,
    pub hinted: usize,
    pub nodes: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.unopened + self.unclosed
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.total() == 0 {
            return write!(f, "no errors ({} tags in structure)", self.nodes);
        }
        write!(
            f,
            "{} error(s): {} unopened, {} unclosed, {} with hints",
            self.total(),
            self.unopened,
            self.unclosed,
            self.hinted
        )
    }
}
