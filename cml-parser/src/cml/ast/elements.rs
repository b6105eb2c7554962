//! Element types of the CML syntax tree
//!
//!     The tree is typed: every node kind the grammar produces has its own struct, and every
//!     container is a typed collection. Top-level declarations are [`Element`]s; braced bodies
//!     are sequences of [`BodyEntry`]s.
//!
//!     Unknown constructs survive as [`GenericBlock`]s so files written against the full Context
//!     Mapper language still parse even though the builder only reads a subset.

pub mod body;
pub mod context;
pub mod context_map;
pub mod domain;
pub mod use_case;

pub use body::{
    Attribute, BlockDecl, Body, BodyEntry, DomainObject, DomainObjectKind, EntityDecl,
    GenericBlock, Value,
};
pub use context::{BoundedContextDecl, Reference};
pub use context_map::{
    Arrow, Connection, ContextMapDecl, ContextMapSetting, Endpoint, RelationshipAttribute,
    RelationshipDecl,
};
pub use domain::{DomainDecl, SubdomainDecl};
pub use use_case::{UseCaseDecl, UseCaseElement};

/// A top-level declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Domain(DomainDecl),
    BoundedContext(BoundedContextDecl),
    ContextMap(ContextMapDecl),
    UseCase(UseCaseDecl),
    Other(GenericBlock),
}

impl Element {
    /// Declared name, if the element has one
    pub fn name(&self) -> Option<&str> {
        match self {
            Element::Domain(d) => Some(&d.name),
            Element::BoundedContext(c) => Some(&c.name),
            Element::ContextMap(m) => m.name.as_deref(),
            Element::UseCase(u) => Some(&u.name),
            Element::Other(_) => None,
        }
    }
}

/// Root of a parsed CML file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SyntaxTree {
    pub elements: Vec<Element>,
}

impl SyntaxTree {
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    pub fn with(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
