//! # lexy
//!
//! Checks tag nesting in markup documents. A scan walks the `<...>` spans of a document,
//! matches closing tags against open ones and reports:
//!
//! - `Unopened`: a closing tag with no open tag of the same name
//! - `Unclosed`: an opening tag never closed by the end of the document, with a
//!   "Possible misspelled tag" hint when an `Unopened` name is one edit away
//!
//! Alongside the errors it builds a structure tree of the nesting it saw.
//!
//! This is not a markup parser: attributes, comments, CDATA and entities are not
//! interpreted. Only delimited spans and tag names are.
//!
//! ```rust
//! let result = lexy::scan("<nav><u><li>x</li></ul></nav>");
//! assert_eq!(result.errors.len(), 2);
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod formats;
pub mod loader;
pub mod location;
pub mod matching;
pub mod scanning;
pub mod structure;
pub mod vocabulary;

pub use analysis::{AnalysisResult, ErrorKind, ErrorRecord, Summary};
pub use error::LexyError;
pub use matching::{scan, scan_with_rules, MatchRules, PathPolicy, TagScanner};
pub use scanning::{TagKind, TagSpan};
pub use structure::{StructureNode, StructureTree, TreePath};
