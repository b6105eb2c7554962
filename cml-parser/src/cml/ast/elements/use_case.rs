//! Use case declarations
//!
//! Syntax:
//!     UseCase <name> [{ actor = "..." secondaryActors = "...", "..." benefit = "..."
//!                       scope = "..." level = "..." ... }]

use super::super::range::Span;
use super::body::BodyEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UseCaseElement {
    Actor(String),
    SecondaryActors(Vec<String>),
    Benefit(String),
    Scope(String),
    Level(String),
    Other(BodyEntry),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UseCaseDecl {
    pub name: String,
    pub elements: Vec<UseCaseElement>,
    pub span: Span,
}

impl UseCaseDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            elements: Vec::new(),
            span: 0..0,
        }
    }

    pub fn with_element(mut self, element: UseCaseElement) -> Self {
        self.elements.push(element);
        self
    }
}
