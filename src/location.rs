//! Line and column lookup for char offsets
//!
//! Tag spans carry char offsets. Reports want `line:column`, so [`SourceLocation`]
//! pre-computes the char offset of every line start once and answers each lookup with a
//! binary search.
//!
//! ```text
//! Source: "<p>\n</q>"
//!   line_starts = [0, 4]
//!   char_to_position(4) -> 2:1
//! ```

use std::fmt;

/// A 1-based line and column
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Converts char offsets to line/column positions
pub struct SourceLocation {
    /// Char offsets where each line starts
    line_starts: Vec<usize>,
}

impl SourceLocation {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (char_pos, ch) in source.chars().enumerate() {
            if ch == '\n' {
                line_starts.push(char_pos + 1);
            }
        }
        Self { line_starts }
    }

    pub fn char_to_position(&self, char_offset: usize) -> Position {
        let line = self
            .line_starts
            .binary_search(&char_offset)
            .unwrap_or_else(|i| i - 1);
        let column = char_offset - self.line_starts[line];
        Position::new(line + 1, column + 1)
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
