//! Declaration and body grammar
//!
//! Top level:
//!     file    := element* EOF
//!     element := domain | bounded-context | context-map | use-case | other
//!
//! Bodies are parsed by one recursive parser, instantiated once per attribute kind. Every body
//! entry consumes at least one token, so a body never loops: recognised declarations first,
//! then `key = value` attributes, then unknown `Keyword ... { ... }` blocks, and finally any
//! single token that is neither a brace nor a declaration keyword is skipped.

use chumsky::error::Error as _;
use chumsky::prelude::*;

use super::combinators::{
    attribute, ident, is_declaration_keyword, is_top_level_keyword, keyword, reference,
    references, soft_keyword, token, token_text, ParserError,
};
use super::context_map::context_map;
use crate::cml::ast::{
    Attribute, BlockDecl, Body, BodyEntry, BoundedContextDecl, DomainDecl, DomainObject,
    DomainObjectKind, Element, GenericBlock, Reference, Span, SubdomainDecl, SyntaxTree,
    UseCaseDecl, UseCaseElement,
};
use crate::cml::token::Token;

/// Which attribute entry a body produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AttributeKind {
    Subdomain,
    Context,
    Plain,
}

impl AttributeKind {
    fn wrap(self, attribute: Attribute) -> BodyEntry {
        match self {
            AttributeKind::Subdomain => BodyEntry::SubdomainAttribute(attribute),
            AttributeKind::Context => BodyEntry::ContextAttribute(attribute),
            AttributeKind::Plain => BodyEntry::Attribute(attribute),
        }
    }
}

fn domain_object_keyword() -> impl Parser<Token, DomainObjectKind, Error = ParserError> + Clone {
    filter_map(|span: Span, token: Token| {
        let kind = match &token {
            Token::Ident(s) => DomainObjectKind::from_keyword(s),
            _ => None,
        };
        kind.ok_or_else(|| Simple::expected_input_found(span, Vec::new(), Some(token)))
    })
}

/// Identifier opening an unknown block
fn block_keyword(
    reserved: fn(&Token) -> bool,
) -> impl Parser<Token, String, Error = ParserError> + Clone {
    filter_map(move |span: Span, token: Token| {
        let accepted = matches!(token, Token::Ident(_)) && !reserved(&token);
        match token {
            Token::Ident(s) if accepted => Ok(s),
            other => Err(Simple::expected_input_found(
                span,
                Some(Some(Token::Ident(String::new()))),
                Some(other),
            )),
        }
    })
}

/// Body entries, without the surrounding braces
pub(crate) fn body(kind: AttributeKind) -> impl Parser<Token, Body, Error = ParserError> + Clone {
    recursive(move |body| {
        let braced = body.delimited_by(token(Token::LBrace), token(Token::RBrace));
        // A header ends where the next `key = value` attribute starts, so bodiless
        // declarations leave the attribute that follows them intact.
        let attribute_ahead = ident().then(token(Token::Equals)).rewind();
        let header = attribute_ahead
            .not()
            .rewind()
            .ignore_then(filter(|t: &Token| {
                !matches!(t, Token::LBrace | Token::RBrace | Token::Equals)
                    && !is_declaration_keyword(t)
            }));

        let named = |kw: &'static str| {
            soft_keyword(kw)
                .ignore_then(ident())
                .then_ignore(header.clone().repeated())
                .then(braced.clone().or_not())
                .map_with_span(|(name, body), span: Span| (name, body.unwrap_or_default(), span))
        };

        let subdomain = named("Subdomain").map(|(name, body, span)| {
            BodyEntry::Subdomain(SubdomainDecl {
                name,
                body,
                entities: Vec::new(),
                span,
            })
        });
        let aggregate = named("Aggregate")
            .map(|(name, body, span)| BodyEntry::Aggregate(BlockDecl { name, body, span }));
        let service = named("Service")
            .map(|(name, body, span)| BodyEntry::Service(BlockDecl { name, body, span }));
        let module = named("Module")
            .map(|(name, body, span)| BodyEntry::Module(BlockDecl { name, body, span }));

        let domain_object = domain_object_keyword()
            .then(ident())
            .then_ignore(header.clone().repeated())
            .then(braced.clone().or_not())
            .map_with_span(|((kind, name), body), span| {
                BodyEntry::DomainObject(DomainObject {
                    kind,
                    name,
                    body: body.unwrap_or_default(),
                    span,
                })
            });

        let block = block_keyword(is_declaration_keyword)
            .then(header.clone().map(|t| token_text(&t)).repeated())
            .then(braced.clone())
            .map_with_span(|((keyword, header), body), span| {
                BodyEntry::Block(GenericBlock {
                    keyword,
                    header,
                    body: Some(body),
                    span,
                })
            });

        let stray = filter(|t: &Token| !t.is_brace() && !is_declaration_keyword(t)).ignored();

        choice((
            subdomain.map(Some),
            domain_object.map(Some),
            aggregate.map(Some),
            service.map(Some),
            module.map(Some),
            attribute().map(move |attr| Some(kind.wrap(attr))),
            block.map(Some),
            stray.to(None),
        ))
        .repeated()
        .map(|entries| Body::new(entries.into_iter().flatten().collect()))
    })
    .boxed()
}

fn braced_body(kind: AttributeKind) -> impl Parser<Token, Body, Error = ParserError> + Clone {
    body(kind).delimited_by(token(Token::LBrace), token(Token::RBrace))
}

fn domain() -> impl Parser<Token, DomainDecl, Error = ParserError> + Clone {
    keyword("Domain")
        .ignore_then(ident())
        .then(braced_body(AttributeKind::Subdomain).or_not())
        .map_with_span(|(name, body), span| DomainDecl {
            name,
            body: body.unwrap_or_default(),
            span,
        })
}

enum ContextClause {
    Implements(Vec<Reference>),
    Realizes(Vec<Reference>),
    Refines(Reference),
}

fn bounded_context() -> impl Parser<Token, BoundedContextDecl, Error = ParserError> + Clone {
    let clause = choice((
        keyword("implements")
            .ignore_then(references())
            .map(ContextClause::Implements),
        keyword("realizes")
            .ignore_then(references())
            .map(ContextClause::Realizes),
        keyword("refines")
            .ignore_then(reference())
            .map(ContextClause::Refines),
    ));

    keyword("BoundedContext")
        .ignore_then(ident())
        .then(clause.repeated())
        .then(braced_body(AttributeKind::Context).or_not())
        .map_with_span(|((name, clauses), body), span| {
            let mut context = BoundedContextDecl {
                name,
                implements: Vec::new(),
                realizes: Vec::new(),
                refines: None,
                body: body.unwrap_or_default(),
                span,
            };
            for clause in clauses {
                match clause {
                    ContextClause::Implements(refs) => context.implements.extend(refs),
                    ContextClause::Realizes(refs) => context.realizes.extend(refs),
                    ContextClause::Refines(reference) => context.refines = Some(reference),
                }
            }
            context
        })
}

fn use_case_element(entry: BodyEntry) -> UseCaseElement {
    let attr = match entry {
        BodyEntry::Attribute(attr) => attr,
        other => return UseCaseElement::Other(other),
    };
    let value = attr.value().map(str::to_string);
    let element = match (attr.key.as_str(), value) {
        ("actor", Some(value)) => Some(UseCaseElement::Actor(value)),
        ("secondaryActors", Some(_)) => Some(UseCaseElement::SecondaryActors(
            attr.values.iter().map(|v| v.as_str().to_string()).collect(),
        )),
        ("benefit", Some(value)) => Some(UseCaseElement::Benefit(value)),
        ("scope", Some(value)) => Some(UseCaseElement::Scope(value)),
        ("level", Some(value)) => Some(UseCaseElement::Level(value)),
        _ => None,
    };
    element.unwrap_or_else(|| UseCaseElement::Other(BodyEntry::Attribute(attr)))
}

fn use_case() -> impl Parser<Token, UseCaseDecl, Error = ParserError> + Clone {
    keyword("UseCase")
        .ignore_then(ident())
        .then(braced_body(AttributeKind::Plain).or_not())
        .map_with_span(|(name, body), span| UseCaseDecl {
            name,
            elements: body
                .unwrap_or_default()
                .entries
                .into_iter()
                .map(use_case_element)
                .collect(),
            span,
        })
}

/// `import "<path>"`
fn import() -> impl Parser<Token, GenericBlock, Error = ParserError> + Clone {
    keyword("import")
        .ignore_then(filter_map(|span: Span, token: Token| match token {
            Token::Str(path) => Ok(path),
            other => Err(Simple::expected_input_found(
                span,
                Some(Some(Token::Str(String::new()))),
                Some(other),
            )),
        }))
        .map_with_span(|path, span| GenericBlock {
            keyword: "import".to_string(),
            header: vec![path],
            body: None,
            span,
        })
}

/// Any other top-level construct: `UserStory US { ... }`, `import "x.cml"`, ...
fn other() -> impl Parser<Token, GenericBlock, Error = ParserError> + Clone {
    let header = filter(|t: &Token| !t.is_brace() && !is_top_level_keyword(t));

    block_keyword(is_top_level_keyword)
        .then(header.map(|t| token_text(&t)).repeated())
        .then(braced_body(AttributeKind::Plain).or_not())
        .map_with_span(|((keyword, header), body), span| GenericBlock {
            keyword,
            header,
            body,
            span,
        })
}

pub(crate) fn element() -> impl Parser<Token, Element, Error = ParserError> + Clone {
    choice((
        domain().map(Element::Domain),
        bounded_context().map(Element::BoundedContext),
        context_map().map(Element::ContextMap),
        use_case().map(Element::UseCase),
        import().map(Element::Other),
        other().map(Element::Other),
    ))
}

/// A whole CML file
pub(crate) fn file() -> impl Parser<Token, SyntaxTree, Error = ParserError> {
    element()
        .repeated()
        .then_ignore(end())
        .map(SyntaxTree::new)
}
