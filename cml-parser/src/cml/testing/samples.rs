//! Curated sample files

use std::fs;
use std::path::PathBuf;

use super::sample_path;
use crate::cml::ast::SyntaxTree;
use crate::cml::loader::CmlLoader;
use crate::cml::model::Cml;
use crate::cml::result::ParseResult;

/// One of the verified files under `cml-parser/samples/`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// A complete landscape: domain, three contexts, a map with roles, a use case
    Insurance,
    /// One context map using every way of stating a relationship type
    Relationships,
    /// Two domains, including a subdomain with an unknown type literal
    Domains,
    /// Use cases only
    UseCases,
    /// A context map missing its closing brace
    UnterminatedMap,
}

impl Sample {
    pub const ALL: [Sample; 5] = [
        Sample::Insurance,
        Sample::Relationships,
        Sample::Domains,
        Sample::UseCases,
        Sample::UnterminatedMap,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            Sample::Insurance => "insurance.cml",
            Sample::Relationships => "relationships.cml",
            Sample::Domains => "domains.cml",
            Sample::UseCases => "use-cases.cml",
            Sample::UnterminatedMap => "invalid/unterminated-map.cml",
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, Sample::UnterminatedMap)
    }

    pub fn path(&self) -> PathBuf {
        sample_path(self.file_name())
    }

    pub fn source(&self) -> String {
        let path = self.path();
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("cannot read sample {}: {}", path.display(), e))
    }

    pub fn loader(&self) -> CmlLoader {
        CmlLoader::from_string(self.source()).with_filename(self.file_name())
    }

    pub fn tree(&self) -> SyntaxTree {
        self.loader()
            .tree()
            .unwrap_or_else(|e| panic!("sample {} does not parse: {}", self.file_name(), e))
    }

    /// Parse in strict mode, panicking on any error
    pub fn parse(&self) -> Cml {
        self.loader()
            .parse()
            .unwrap_or_else(|e| panic!("sample {} does not build: {}", self.file_name(), e))
    }

    pub fn parse_safe(&self) -> ParseResult {
        self.loader().parse_safe()
    }
}
