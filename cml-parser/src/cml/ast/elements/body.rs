//! Block bodies
//!
//!  Every braced block in CML shares the same body shape: a sequence of entries, each of which is
//!  a nested declaration, a `key = value` attribute, or an unknown block. Content the grammar does
//!  not interpret (entity fields, operations, user-story prose) is skipped and never reaches the
//!  tree.
//!
//!  Which attribute variant an entry uses depends on the enclosing declaration: domain and
//!  subdomain bodies produce [`BodyEntry::SubdomainAttribute`], bounded-context bodies produce
//!  [`BodyEntry::ContextAttribute`], everything else [`BodyEntry::Attribute`]. Consumers that read
//!  attributes (the vision override, for one) accept both named kinds.

use super::super::range::Span;

/// A literal on the right-hand side of an attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Str(String),
    Ident(String),
    Number(String),
}

impl Value {
    pub fn as_str(&self) -> &str {
        match self {
            Value::Str(s) | Value::Ident(s) | Value::Number(s) => s,
        }
    }
}

/// `key = value (, value)*`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub key: String,
    pub values: Vec<Value>,
    pub span: Span,
}

impl Attribute {
    pub fn new(key: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            key: key.into(),
            values,
            span: 0..0,
        }
    }

    /// Shorthand for a single string value
    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, vec![Value::Str(value.into())])
    }

    /// Shorthand for a single identifier value
    pub fn ident(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, vec![Value::Ident(value.into())])
    }

    /// The first value, if any
    pub fn value(&self) -> Option<&str> {
        self.values.first().map(Value::as_str)
    }

    pub fn at(mut self, span: Span) -> Self {
        self.span = span;
        self
    }
}

/// A named declaration with a body (aggregates, services, modules)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockDecl {
    pub name: String,
    pub body: Body,
    pub span: Span,
}

impl BlockDecl {
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

/// The legacy bare entity form, and the element type of a subdomain's legacy entity list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDecl {
    pub name: String,
    pub span: Span,
}

impl EntityDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            span: 0..0,
        }
    }
}

/// Kinds of simple domain objects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainObjectKind {
    Entity,
    ValueObject,
    DomainEvent,
    CommandEvent,
    DataTransferObject,
    Enum,
}

impl DomainObjectKind {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "Entity" => Some(DomainObjectKind::Entity),
            "ValueObject" => Some(DomainObjectKind::ValueObject),
            "DomainEvent" | "Event" => Some(DomainObjectKind::DomainEvent),
            "CommandEvent" => Some(DomainObjectKind::CommandEvent),
            "DataTransferObject" => Some(DomainObjectKind::DataTransferObject),
            "enum" | "Enum" => Some(DomainObjectKind::Enum),
            _ => None,
        }
    }
}

/// Wrapper entry for a simple domain object (`Entity`, `ValueObject`, `DomainEvent`, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainObject {
    pub kind: DomainObjectKind,
    pub name: String,
    pub body: Body,
    pub span: Span,
}

impl DomainObject {
    pub fn new(kind: DomainObjectKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            body: Body::default(),
            span: 0..0,
        }
    }

    pub fn entity(name: impl Into<String>) -> Self {
        Self::new(DomainObjectKind::Entity, name)
    }
}

/// A block the grammar does not interpret: `UserStory US1 { ... }`, `import "x.cml"`, ...
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericBlock {
    pub keyword: String,
    /// Text of the tokens between the keyword and the body
    pub header: Vec<String>,
    pub body: Option<Body>,
    pub span: Span,
}

impl GenericBlock {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            header: Vec::new(),
            body: None,
            span: 0..0,
        }
    }

    pub fn with_body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }
}

/// Entries of a braced body, in source order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Body {
    pub entries: Vec<BodyEntry>,
}

impl Body {
    pub fn new(entries: Vec<BodyEntry>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Attributes of every kind, in source order
    pub fn attributes(&self) -> impl Iterator<Item = &Attribute> {
        self.entries.iter().filter_map(|entry| match entry {
            BodyEntry::SubdomainAttribute(attr)
            | BodyEntry::ContextAttribute(attr)
            | BodyEntry::Attribute(attr) => Some(attr),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyEntry {
    SubdomainAttribute(Attribute),
    ContextAttribute(Attribute),
    Attribute(Attribute),
    Subdomain(super::domain::SubdomainDecl),
    DomainObject(DomainObject),
    /// Legacy bare entity child
    Entity(EntityDecl),
    Aggregate(BlockDecl),
    Service(BlockDecl),
    Module(BlockDecl),
    Block(GenericBlock),
}
