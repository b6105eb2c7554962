//! Position tracking for source locations
//!
//! Tree nodes keep plain byte spans (`Range<usize>`). Line and column positions are only
//! computed when something needs to be shown to a person, which in practice means diagnostics.
//!
//! - [`Position`] - A 0-based line:column position in source code
//! - [`SourceLocation`] - Utility for converting byte offsets to positions

use std::fmt;
use std::ops::Range as ByteRange;

/// Byte span of a node in its source text
pub type Span = ByteRange<usize>;

/// Represents a position in source code (line and column, both 0-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
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

/// Provides fast conversion from byte offsets to line/column positions
pub struct SourceLocation<'a> {
    source: &'a str,
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl<'a> SourceLocation<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];

        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }

        Self {
            source,
            line_starts,
        }
    }

    /// Convert a byte offset to a line/column position. Columns count characters.
    pub fn byte_to_position(&self, byte_offset: usize) -> Position {
        let line = self
            .line_starts
            .binary_search(&byte_offset)
            .unwrap_or_else(|i| i - 1);

        let start = self.line_starts[line];
        let column = match self.source.get(start..byte_offset) {
            Some(prefix) => prefix.chars().count(),
            None => byte_offset - start,
        };

        Position::new(line, column)
    }

    /// Get the total number of lines in the source
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset for the start of a line
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_ordering() {
        assert!(Position::new(1, 5) < Position::new(2, 0));
        assert_eq!(Position::new(3, 1), Position::new(3, 1));
        assert_eq!(format!("{}", Position::new(5, 10)), "5:10");
    }

    #[test]
    fn test_byte_to_position_multiline() {
        let loc = SourceLocation::new("Domain A {\n  Subdomain B\n}");

        assert_eq!(loc.byte_to_position(0), Position::new(0, 0));
        assert_eq!(loc.byte_to_position(7), Position::new(0, 7));
        assert_eq!(loc.byte_to_position(11), Position::new(1, 0));
        assert_eq!(loc.byte_to_position(13), Position::new(1, 2));
        assert_eq!(loc.byte_to_position(25), Position::new(2, 0));
    }

    #[test]
    fn test_byte_to_position_with_unicode() {
        let source = "\"Zürich\" Schadenfälle\nB";
        let loc = SourceLocation::new(source);

        let name = source.find("Schadenfälle").unwrap();
        assert_eq!(name, 10);
        assert_eq!(loc.byte_to_position(name), Position::new(0, 9));
        assert_eq!(loc.byte_to_position(source.len() - 1), Position::new(1, 0));
    }

    #[test]
    fn test_line_lookup() {
        let loc = SourceLocation::new("a\nbb\nccc");

        assert_eq!(loc.line_count(), 3);
        assert_eq!(loc.line_start(0), Some(0));
        assert_eq!(loc.line_start(1), Some(2));
        assert_eq!(loc.line_start(2), Some(5));
        assert_eq!(loc.line_start(3), None);
    }
}
