//! Static tag tables
//!
//! Two reference lists live here:
//! - [`KNOWN_TAGS`]: the recognized HTML tag vocabulary. The matcher never consults it;
//!   callers use it for context (the report format flags closers whose name is not in it).
//! - [`SELF_CLOSING_TAGS`]: void tags that never take a closing counterpart. Open tags
//!   with these names are exempt from `Unclosed` reporting.
//!
//! Both are the built-in defaults. `defaults/lexy.default.toml` leaves them commented out;
//! a `[vocabulary]` list in a user configuration file replaces the matching table.

use once_cell::sync::Lazy;
use std::collections::HashSet;

pub const KNOWN_TAGS: &[&str] = &[
    "html",
    "head",
    "body",
    "div",
    "ul",
    "li",
    "nav",
    "span",
    "p",
    "br",
    "title",
    "meta",
    "img",
    "section",
    "article",
    "main",
    "footer",
    "header",
    "aside",
    "time",
    "dl",
    "dd",
    "dt",
    "ol",
    "acronym",
    "address",
    "blockquote",
    "em",
    "b",
    "i",
    "button",
    "canvas",
    "form",
    "code",
    "pre",
    "embed",
    "fieldset",
    "figure",
    "input",
    "hr",
    "iframe",
    "a",
    "strong",
    "style",
    "script",
    "table",
    "thead",
    "tbody",
    "tr",
    "td",
    "th",
    "video",
    "u",
    "link",
    "label",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
];

pub const SELF_CLOSING_TAGS: &[&str] = &[
    "!DOCTYPE", "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta",
    "param", "source", "track", "wbr",
];

static SELF_CLOSING_LOOKUP: Lazy<HashSet<String>> =
    Lazy::new(|| normalized_set(SELF_CLOSING_TAGS.iter().copied()));

static KNOWN_LOOKUP: Lazy<HashSet<&'static str>> = Lazy::new(|| KNOWN_TAGS.iter().copied().collect());

/// Build a lookup set with ASCII-lowercased names.
pub fn normalized_set<I, S>(names: I) -> HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| name.as_ref().to_ascii_lowercase())
        .collect()
}

/// Whether `tag` is a void tag in the built-in table (ASCII case-insensitive).
pub fn is_self_closing(tag: &str) -> bool {
    SELF_CLOSING_LOOKUP.contains(&tag.to_ascii_lowercase())
}

/// Whether `tag` belongs to the built-in HTML vocabulary (exact match).
pub fn is_known_tag(tag: &str) -> bool {
    KNOWN_LOOKUP.contains(tag)
}
