//! Domain and subdomain declarations
//!
//! Syntax:
//!     Domain <name> [{ <entries> }]
//!     Subdomain <name> [supports <feature>, ...] [{ <entries> }]
//!
//! Subdomains nest inside domain bodies, possibly below unknown blocks. Their entities come from
//! three places: `Entity` domain objects in the body, bare legacy entity entries, and the legacy
//! `entities` list. The grammar only produces the first; the other two appear in trees built in
//! code.

use super::super::range::Span;
use super::body::{Body, BodyEntry, EntityDecl};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainDecl {
    pub name: String,
    pub body: Body,
    pub span: Span,
}

impl DomainDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: Body::default(),
            span: 0..0,
        }
    }

    pub fn with_entry(mut self, entry: BodyEntry) -> Self {
        self.body.entries.push(entry);
        self
    }

    pub fn at(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubdomainDecl {
    pub name: String,
    pub body: Body,
    /// Legacy direct entity list
    pub entities: Vec<EntityDecl>,
    pub span: Span,
}

impl SubdomainDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: Body::default(),
            entities: Vec::new(),
            span: 0..0,
        }
    }

    pub fn with_entry(mut self, entry: BodyEntry) -> Self {
        self.body.entries.push(entry);
        self
    }

    pub fn with_legacy_entities(mut self, names: &[&str]) -> Self {
        self.entities
            .extend(names.iter().map(|name| EntityDecl::new(*name)));
        self
    }

    pub fn at(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}
