//! Parsing stage: source text to syntax tree
//!
//! The tree travels together with its source so later stages can still locate what they
//! report.

use crate::cml::ast::SyntaxTree;
use crate::cml::parsing::parse_source;
use crate::cml::transforms::{Runnable, TransformError};

/// A syntax tree and the text it was parsed from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSource {
    pub source: String,
    pub tree: SyntaxTree,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Parsing;

impl Parsing {
    pub fn new() -> Self {
        Parsing
    }
}

impl Runnable<String, ParsedSource> for Parsing {
    fn run(&self, source: String) -> Result<ParsedSource, TransformError> {
        let tree = parse_source(&source)?;
        Ok(ParsedSource { source, tree })
    }
}
