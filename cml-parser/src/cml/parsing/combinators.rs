//! Parser combinator functions shared by the CML grammar.

use chumsky::error::Error as _;
use chumsky::prelude::*;

use crate::cml::ast::{Attribute, Reference, Span, Value};
use crate::cml::token::Token;

/// Type alias for parser error
pub(crate) type ParserError = Simple<Token>;

/// Keywords that open a declaration inside a body. They are never skipped as stray content.
const DECLARATION_KEYWORDS: &[&str] = &[
    "Domain",
    "Subdomain",
    "BoundedContext",
    "ContextMap",
    "UseCase",
    "Aggregate",
    "Service",
    "Module",
    "Entity",
    "ValueObject",
    "DomainEvent",
    "Event",
    "CommandEvent",
    "DataTransferObject",
    "enum",
    "Enum",
];

/// Keywords that open a top-level element the builder reads
const TOP_LEVEL_KEYWORDS: &[&str] = &["Domain", "BoundedContext", "ContextMap", "UseCase"];

pub(crate) fn is_declaration_keyword(token: &Token) -> bool {
    matches!(token, Token::Ident(s) if DECLARATION_KEYWORDS.contains(&s.as_str()))
}

pub(crate) fn is_top_level_keyword(token: &Token) -> bool {
    matches!(token, Token::Ident(s) if TOP_LEVEL_KEYWORDS.contains(&s.as_str()))
}

/// Source-like text of a token, strings without their quotes
pub(crate) fn token_text(token: &Token) -> String {
    match token {
        Token::Str(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Match a specific token
pub(crate) fn token(t: Token) -> impl Parser<Token, Token, Error = ParserError> + Clone {
    just(t)
}

/// Match a keyword, reporting it as expected when absent
pub(crate) fn keyword(kw: &str) -> impl Parser<Token, (), Error = ParserError> + Clone {
    just(Token::Ident(kw.to_string())).ignored()
}

/// Match a keyword without adding it to the expected set of an error.
///
/// Used for the many declaration keywords allowed inside bodies, which would otherwise flood
/// every "unclosed body" diagnostic.
pub(crate) fn soft_keyword(kw: &'static str) -> impl Parser<Token, (), Error = ParserError> + Clone {
    filter_map(move |span: Span, token: Token| {
        if token.is_keyword(kw) {
            Ok(())
        } else {
            Err(Simple::expected_input_found(span, Vec::new(), Some(token)))
        }
    })
}

/// Any identifier
pub(crate) fn ident() -> impl Parser<Token, String, Error = ParserError> + Clone {
    filter_map(|span: Span, token: Token| match token {
        Token::Ident(name) => Ok(name),
        other => Err(Simple::expected_input_found(
            span,
            Some(Some(Token::Ident(String::new()))),
            Some(other),
        )),
    })
}

/// An identifier naming another declaration
pub(crate) fn reference() -> impl Parser<Token, Reference, Error = ParserError> + Clone {
    ident().map_with_span(|name, span| Reference { name, span })
}

/// `name (, name)*`
pub(crate) fn references() -> impl Parser<Token, Vec<Reference>, Error = ParserError> + Clone {
    reference()
        .separated_by(token(Token::Comma))
        .at_least(1)
}

/// A relationship keyword such as `Shared-Kernel`
pub(crate) fn relationship_keyword() -> impl Parser<Token, String, Error = ParserError> + Clone {
    filter_map(|span: Span, token: Token| match token {
        Token::RelationshipKeyword(keyword) => Ok(keyword),
        other => Err(Simple::expected_input_found(
            span,
            Some(Some(Token::RelationshipKeyword(String::new()))),
            Some(other),
        )),
    })
}

/// Right-hand side literal of an attribute
pub(crate) fn value() -> impl Parser<Token, Value, Error = ParserError> + Clone {
    filter_map(|span: Span, token: Token| match token {
        Token::Str(s) => Ok(Value::Str(s)),
        Token::Ident(s) | Token::RelationshipKeyword(s) => Ok(Value::Ident(s)),
        Token::Number(n) => Ok(Value::Number(n)),
        other => Err(Simple::expected_input_found(
            span,
            vec![
                Some(Token::Str(String::new())),
                Some(Token::Ident(String::new())),
            ],
            Some(other),
        )),
    })
}

/// `key = value (, value)*`
pub(crate) fn attribute() -> impl Parser<Token, Attribute, Error = ParserError> + Clone {
    ident()
        .then_ignore(token(Token::Equals))
        .then(value().separated_by(token(Token::Comma)).at_least(1))
        .map_with_span(|(key, values), span| Attribute { key, values, span })
}

/// `[ROLE, ROLE, ...]`
pub(crate) fn roles() -> impl Parser<Token, Vec<String>, Error = ParserError> + Clone {
    ident()
        .separated_by(token(Token::Comma))
        .at_least(1)
        .delimited_by(token(Token::LBracket), token(Token::RBracket))
}
