//! Bounded context declarations
//!
//! Syntax:
//!     BoundedContext <name> [implements <subdomain>, ...] [realizes <context>, ...]
//!         [refines <context>] [{ <entries> }]
//!
//! Body attributes are [`BodyEntry::ContextAttribute`]s. The builder reads `type`,
//! `domainVisionStatement`, `responsibilities`, `implementationTechnology` and `knowledgeLevel`
//! from them; aggregates and services may sit at any depth below the body.

use super::super::range::Span;
use super::body::{Body, BodyEntry};

/// A name referring to another declaration, kept with its span for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub name: String,
    pub span: Span,
}

impl Reference {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            span: 0..0,
        }
    }
}

impl From<&str> for Reference {
    fn from(name: &str) -> Self {
        Reference::new(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedContextDecl {
    pub name: String,
    pub implements: Vec<Reference>,
    pub realizes: Vec<Reference>,
    pub refines: Option<Reference>,
    pub body: Body,
    pub span: Span,
}

impl BoundedContextDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            implements: Vec::new(),
            realizes: Vec::new(),
            refines: None,
            body: Body::default(),
            span: 0..0,
        }
    }

    pub fn implementing(mut self, names: &[&str]) -> Self {
        self.implements
            .extend(names.iter().map(|name| Reference::new(*name)));
        self
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
