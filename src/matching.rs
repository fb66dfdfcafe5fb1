//! Tag matcher
//!
//! [`TagScanner`] drives the span scanner over one document and matches closing tags
//! against the tags opened so far:
//!
//! - An opening tag is pushed on the open-tag stack, inserted into the structure tree at
//!   the current path, and appended to the path.
//! - A closing tag clears the first open entry with the same name, searching from the
//!   oldest entry. Matching is by name anywhere in the stack, so interleaved closers such as
//!   `<b><i></b></i>` match without errors. A closer with no live opener is recorded as
//!   `Unopened`. The path is then popped according to the [`PathPolicy`].
//! - Once the document is exhausted, every entry left open (void tags aside) becomes an
//!   `Unclosed` record. If the nearest `Unopened` tag name is exactly
//!   [`MatchRules::hint_distance`] edits away, the record carries a misspelling hint.
//!
//! A scanner owns all of its state and handles exactly one document: [`TagScanner::scan`]
//! consumes it.

use crate::analysis::{AnalysisResult, ErrorRecord};
use crate::scanning::{SpanScanner, TagKind, TagSpan};
use crate::structure::TreePath;
use crate::vocabulary::{self, SELF_CLOSING_TAGS};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashSet;
use strsim::levenshtein;
use tracing::{debug, trace};

static DEFAULT_RULES: Lazy<MatchRules> = Lazy::new(MatchRules::default);

/// When a closing tag pops the structure path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PathPolicy {
    /// Every closing tag pops, matched or not
    #[default]
    Unconditional,
    /// Only closing tags that matched an open tag pop
    MatchedOnly,
}

/// Knobs consulted while matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRules {
    self_closing: HashSet<String>,
    pub hint_distance: usize,
    pub path_policy: PathPolicy,
}

impl MatchRules {
    /// Rules with the given void tags and default hint distance and path policy.
    pub fn new<I, S>(self_closing: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        MatchRules {
            self_closing: vocabulary::normalized_set(self_closing),
            hint_distance: 1,
            path_policy: PathPolicy::default(),
        }
    }

    pub fn with_hint_distance(mut self, distance: usize) -> Self {
        self.hint_distance = distance;
        self
    }

    pub fn with_path_policy(mut self, policy: PathPolicy) -> Self {
        self.path_policy = policy;
        self
    }

    /// Void tags are compared ASCII case-insensitively.
    pub fn is_self_closing(&self, tag: &str) -> bool {
        self.self_closing.contains(&tag.to_ascii_lowercase())
    }
}

impl Default for MatchRules {
    fn default() -> Self {
        MatchRules::new(SELF_CLOSING_TAGS.iter())
    }
}

/// Single-document scanner and matcher
pub struct TagScanner<'a> {
    spans: SpanScanner<'a>,
    rules: &'a MatchRules,
    open_tags: Vec<Option<TagSpan>>,
    path: TreePath,
    analysis: AnalysisResult,
}

impl<'a> TagScanner<'a> {
    /// Scanner with the built-in rules.
    pub fn new(document: &'a str) -> Self {
        Self::with_rules(document, &DEFAULT_RULES)
    }

    pub fn with_rules(document: &'a str, rules: &'a MatchRules) -> Self {
        TagScanner {
            spans: SpanScanner::new(document),
            rules,
            open_tags: Vec::new(),
            path: TreePath::new(),
            analysis: AnalysisResult::default(),
        }
    }

    /// Current insertion point in the structure tree.
    pub fn path(&self) -> &TreePath {
        &self.path
    }

    /// Tags opened and not yet matched, in opening order.
    pub fn open_tags(&self) -> impl Iterator<Item = &TagSpan> {
        self.open_tags.iter().flatten()
    }

    /// Records found so far. Only `Unopened` records exist before [`TagScanner::finish`].
    pub fn errors(&self) -> &[ErrorRecord] {
        &self.analysis.errors
    }

    /// Process the next tag span. Returns `false` once the document is exhausted.
    pub fn advance(&mut self) -> bool {
        let Some(span) = self.spans.next() else {
            return false;
        };
        trace!(tag = %span.tag, start = span.start, end = span.end, "tag span");
        match span.kind() {
            TagKind::Opening => self.open(span),
            TagKind::Closing => self.close(span),
        }
        true
    }

    fn open(&mut self, span: TagSpan) {
        self.analysis.structure.insert_at(&self.path, &span.tag);
        self.path.push(&span.tag);
        self.open_tags.push(Some(span));
    }

    fn close(&mut self, span: TagSpan) {
        let matched = self
            .open_tags
            .iter()
            .position(|entry| entry.as_ref().is_some_and(|open| open.tag == span.tag));
        if let Some(index) = matched {
            self.open_tags[index] = None;
        }

        let pops = matched.is_some() || self.rules.path_policy == PathPolicy::Unconditional;
        if pops {
            match self.path.pop() {
                Some(segment) if segment == span.tag => {}
                popped => {
                    debug!(
                        tag = %span.tag,
                        popped = popped.as_deref().unwrap_or("<root>"),
                        "closing tag desynchronized the structure path"
                    );
                    self.analysis.path_desyncs += 1;
                }
            }
        }

        if matched.is_none() {
            debug!(tag = %span.tag, start = span.start, "unopened closing tag");
            self.analysis.errors.push(ErrorRecord::unopened(span));
        }
    }

    /// Scan whatever is left of the document, then report every tag still open.
    pub fn finish(mut self) -> AnalysisResult {
        while self.advance() {}

        let remaining: Vec<TagSpan> = self.open_tags.drain(..).flatten().collect();
        for tag in remaining {
            if self.rules.is_self_closing(&tag.tag) {
                continue;
            }
            let record = self.resolve_unclosed(tag);
            debug!(tag = %record.tag(), hint = ?record.hint, "unclosed tag");
            self.analysis.errors.push(record);
        }

        debug!(summary = %self.analysis.summary(), "scan finished");
        self.analysis
    }

    /// Run the whole scan.
    pub fn scan(self) -> AnalysisResult {
        self.finish()
    }

    fn resolve_unclosed(&self, tag: TagSpan) -> ErrorRecord {
        // First candidate wins ties; nameless closers suggest nothing
        let nearest = self
            .analysis
            .unopened()
            .filter(|candidate| !candidate.tag().is_empty())
            .map(|candidate| (levenshtein(candidate.tag(), &tag.tag), candidate))
            .min_by_key(|(distance, _)| *distance);

        match nearest {
            Some((distance, candidate)) if distance == self.rules.hint_distance => {
                ErrorRecord::unclosed(tag).with_suggestion(candidate.tag())
            }
            _ => ErrorRecord::unclosed(tag),
        }
    }
}

/// Scan `document` with the built-in rules.
pub fn scan(document: &str) -> AnalysisResult {
    TagScanner::new(document).scan()
}

/// Scan `document` with custom rules.
pub fn scan_with_rules(document: &str, rules: &MatchRules) -> AnalysisResult {
    TagScanner::with_rules(document, rules).scan()
}
