//! Context map declarations
//!
//! Syntax:
//!     ContextMap [<name>] {
//!         type = <literal>  state = <literal>  contains <context>, ...
//!         <endpoint> <connection> <endpoint> [: <name>] [{ <attributes> }]
//!     }
//!
//!     endpoint   := ['[' <role>, ... ']'] <context> ['[' <role>, ... ']']
//!     connection := [<relationship keyword>] [-> | <- | <->]   (at least one of the two)
//!
//! Examples:
//!     Customers [U,OHS]->[D,ACL] Claims
//!     Policies Partnership Contracts
//!     Policies <-> Risk : RiskSharing { type = Shared-Kernel }
//!
//! A trailing role list binds greedily to the endpoint before it, so `A -> B [U] C -> D` gives
//! `B` the roles `[U]` and leaves `C` without any.
//!
//! An arrow with a role list written directly against it (`[U]->`, `->[D]`) is part of the
//! upstream/downstream role notation. Only a bare arrow is an arrow connector; see
//! [`RelationshipDecl::arrow_connector`].

use super::super::range::Span;
use super::body::Attribute;
use super::context::Reference;
use std::fmt;

/// Flat settings of a context map, in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextMapSetting {
    Type(String),
    State(String),
    Contains(Vec<Reference>),
    Attribute(Attribute),
}

/// Arrow connector between two endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arrow {
    Right,
    Left,
    Both,
}

impl Arrow {
    pub fn as_str(&self) -> &'static str {
        match self {
            Arrow::Right => "->",
            Arrow::Left => "<-",
            Arrow::Both => "<->",
        }
    }
}

impl fmt::Display for Arrow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One side of a relationship together with the role lists written around it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub name: String,
    pub roles_before: Vec<String>,
    pub roles_after: Vec<String>,
    pub span: Span,
}

impl Endpoint {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roles_before: Vec::new(),
            roles_after: Vec::new(),
            span: 0..0,
        }
    }

    pub fn before(mut self, roles: &[&str]) -> Self {
        self.roles_before = roles.iter().map(|r| r.to_string()).collect();
        self
    }

    pub fn after(mut self, roles: &[&str]) -> Self {
        self.roles_after = roles.iter().map(|r| r.to_string()).collect();
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Connection {
    pub keyword: Option<String>,
    pub arrow: Option<Arrow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelationshipAttribute {
    Type(String),
    ImplementationTechnology(String),
    Other(Attribute),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipDecl {
    pub left: Endpoint,
    pub connection: Connection,
    pub right: Endpoint,
    pub name: Option<String>,
    pub attributes: Vec<RelationshipAttribute>,
    pub span: Span,
}

impl RelationshipDecl {
    pub fn new(left: Endpoint, connection: Connection, right: Endpoint) -> Self {
        Self {
            left,
            connection,
            right,
            name: None,
            attributes: Vec::new(),
            span: 0..0,
        }
    }

    /// `left <arrow> right` without roles
    pub fn arrow(left: &str, arrow: Arrow, right: &str) -> Self {
        Self::new(
            Endpoint::new(left),
            Connection {
                keyword: None,
                arrow: Some(arrow),
            },
            Endpoint::new(right),
        )
    }

    /// `left <keyword> right` without roles
    pub fn keyword(left: &str, keyword: &str, right: &str) -> Self {
        Self::new(
            Endpoint::new(left),
            Connection {
                keyword: Some(keyword.to_string()),
                arrow: None,
            },
            Endpoint::new(right),
        )
    }

    pub fn with_attribute(mut self, attribute: RelationshipAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// The arrow, unless a role list touches it
    pub fn arrow_connector(&self) -> Option<Arrow> {
        let annotated = !self.left.roles_after.is_empty() || !self.right.roles_before.is_empty();
        self.connection.arrow.filter(|_| !annotated)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextMapDecl {
    pub name: Option<String>,
    pub settings: Vec<ContextMapSetting>,
    pub relationships: Vec<RelationshipDecl>,
    pub span: Span,
}

impl ContextMapDecl {
    pub fn new(name: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            settings: Vec::new(),
            relationships: Vec::new(),
            span: 0..0,
        }
    }

    pub fn with_setting(mut self, setting: ContextMapSetting) -> Self {
        self.settings.push(setting);
        self
    }

    pub fn with_relationship(mut self, relationship: RelationshipDecl) -> Self {
        self.relationships.push(relationship);
        self
    }

    pub fn at(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}
