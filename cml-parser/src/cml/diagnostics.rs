//! Diagnostics produced while parsing and building a CML model
//!
//! A single [`Diagnostic`] type is used for everything the pipeline reports: syntax errors from
//! the lexer and grammar, and the recoverable findings of the builder (unresolved references,
//! duplicate names, unknown subdomain types). Syntax diagnostics are always errors; builder
//! findings are warnings unless the build options escalate them.
//!
//! ## Rendering
//!
//! `[filename:line:col] message (expected: a, b, c)`, with every absent part omitted.

use crate::cml::ast::range::SourceLocation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Diagnostic severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Stable codes for the diagnostics the builder emits
pub mod codes {
    pub const SYNTAX: &str = "syntax";
    pub const UNRESOLVED_REFERENCE: &str = "unresolved-reference";
    pub const DUPLICATE_NAME: &str = "duplicate-name";
    pub const UNKNOWN_SUBDOMAIN_TYPE: &str = "unknown-subdomain-type";
    pub const IO: &str = "io";
}

/// Structured diagnostic with optional location, expectations and source context.
///
/// `line` and `col` are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub message: String,
    pub severity: Severity,
    pub code: Option<String>,
    pub line: Option<usize>,
    pub col: Option<usize>,
    pub filename: Option<String>,
    pub expected: Option<Vec<String>>,
    pub context: Option<String>,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity,
            code: None,
            line: None,
            col: None,
            filename: None,
            expected: None,
            context: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Set a 1-based line and column
    pub fn at(mut self, line: usize, col: usize) -> Self {
        self.line = Some(line);
        self.col = Some(col);
        self
    }

    /// Locate the diagnostic at the start of `span`, attaching the surrounding source lines
    pub fn at_span(self, source: &str, span: &Range<usize>) -> Self {
        let position = SourceLocation::new(source).byte_to_position(span.start.min(source.len()));
        let context = format_source_context(source, position.line);
        self.at(position.line + 1, position.column + 1)
            .with_context(context)
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_expected(mut self, expected: Vec<String>) -> Self {
        self.expected = if expected.is_empty() {
            None
        } else {
            Some(expected)
        };
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        let context = context.into();
        self.context = if context.is_empty() {
            None
        } else {
            Some(context)
        };
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Render as `[filename:line:col] message (expected: a, b, c)`
    pub fn pretty(&self) -> String {
        let mut location = String::new();
        if let Some(filename) = &self.filename {
            location.push_str(filename);
        }
        if let Some(line) = self.line {
            location.push_str(&format!(":{}", line));
            if let Some(col) = self.col {
                location.push_str(&format!(":{}", col));
            }
        }

        let mut rendered = String::new();
        if !location.is_empty() {
            rendered.push_str(&format!("[{}] ", location));
        }
        rendered.push_str(&self.message);
        if let Some(expected) = self.expected.as_ref().filter(|e| !e.is_empty()) {
            rendered.push_str(&format!(" (expected: {})", expected.join(", ")));
        }
        rendered
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pretty())
    }
}

/// Format source code context around a 0-based line
///
/// Shows 2 lines before the error, the error line with >> marker, and 2 lines after.
/// All lines are numbered for easy reference.
pub fn format_source_context(source: &str, error_line: usize) -> String {
    let lines: Vec<&str> = source.lines().collect();

    let start_line = error_line.saturating_sub(2);
    let end_line = (error_line + 3).min(lines.len());

    let mut context = String::new();
    for (line_num, line) in lines.iter().enumerate().take(end_line).skip(start_line) {
        let marker = if line_num == error_line { ">>" } else { "  " };
        context.push_str(&format!("{} {:3} | {}\n", marker, line_num + 1, line));
    }
    context
}
