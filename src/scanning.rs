//! Tag span scanning
//!
//! Walks a document left to right and yields every `<...>` delimited span in document
//! order. Nothing about markup is understood here: comments, attributes with quoted `>`
//! characters and CDATA sections are all just spans. The only interpretation applied is
//! tag-name cleaning and the opening/closing classification.
//!
//! Offsets are char offsets (`end` is one past the `>`). The scanner keeps a byte cursor and
//! a char cursor side by side, so each span costs one search for `<`, one search for `>`
//! starting at that `<`, and a char count over the bytes it skipped.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

static TAG_DELIMITERS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[<>/]").unwrap());

/// Whether a span opens or closes a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Opening,
    Closing,
}

/// A located `<...>` occurrence in the source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagSpan {
    /// Raw span text, delimiters included
    #[serde(rename = "match")]
    pub raw: String,
    pub start: usize,
    pub end: usize,
    /// Char length of the cleaned tag name
    pub length: usize,
    pub tag: String,
}

impl TagSpan {
    /// Build a span from its raw text and char start offset.
    pub fn new(raw: impl Into<String>, start: usize) -> Self {
        let raw = raw.into();
        let tag = clean_tag(&raw);
        TagSpan {
            start,
            end: start + raw.chars().count(),
            length: tag.chars().count(),
            tag,
            raw,
        }
    }

    /// A span is closing when its second character is `/`.
    pub fn kind(&self) -> TagKind {
        if self.raw.chars().nth(1) == Some('/') {
            TagKind::Closing
        } else {
            TagKind::Opening
        }
    }
}

impl fmt::Display for TagSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{} {}", self.start, self.end, self.raw)
    }
}

/// Strip `<`, `>` and `/` from a raw span and keep only the first whitespace-delimited token.
///
/// `<div id="x">` gives `div`, `</span>` gives `span`, `<br/>` gives `br`. Leading
/// whitespace yields an empty name (`< div>` gives ``).
pub fn clean_tag(raw: &str) -> String {
    let stripped = TAG_DELIMITERS.replace_all(raw, "");
    stripped
        .split(char::is_whitespace)
        .next()
        .unwrap_or("")
        .to_string()
}

/// Iterator over the tag spans of a document
pub struct SpanScanner<'a> {
    source: &'a str,
    byte_pos: usize,
    char_pos: usize,
    done: bool,
}

impl<'a> SpanScanner<'a> {
    pub fn new(source: &'a str) -> Self {
        SpanScanner {
            source,
            byte_pos: 0,
            char_pos: 0,
            done: false,
        }
    }
}

impl Iterator for SpanScanner<'_> {
    type Item = TagSpan;

    fn next(&mut self) -> Option<TagSpan> {
        if self.done {
            return None;
        }
        let rest = &self.source[self.byte_pos..];
        let Some(open_rel) = rest.find('<') else {
            self.done = true;
            return None;
        };
        let Some(close_rel) = rest[open_rel..].find('>') else {
            self.done = true;
            return None;
        };

        let close_rel = open_rel + close_rel;
        let raw = &rest[open_rel..=close_rel];
        let start = self.char_pos + rest[..open_rel].chars().count();
        let span = TagSpan::new(raw, start);

        self.byte_pos += close_rel + 1;
        self.char_pos = span.end;
        Some(span)
    }
}

/// Collect every tag span of `source` in document order.
pub fn spans(source: &str) -> Vec<TagSpan> {
    SpanScanner::new(source).collect()
}
