//! Context map grammar
//!
//! A context map body is a flat list of settings (`type`, `state`, `contains`, any other
//! attribute) and relationship declarations. Unlike other bodies, nothing unknown is skipped
//! here: an entry that is neither a setting nor a relationship is a syntax error.

use chumsky::prelude::*;

use super::combinators::{
    attribute, ident, keyword, references, relationship_keyword, roles, token, ParserError,
};
use crate::cml::ast::{
    Arrow, Attribute, Connection, ContextMapDecl, ContextMapSetting, Endpoint,
    RelationshipAttribute, RelationshipDecl,
};
use crate::cml::token::Token;

enum MapEntry {
    Setting(ContextMapSetting),
    Relationship(RelationshipDecl),
}

fn arrow() -> impl Parser<Token, Arrow, Error = ParserError> + Clone {
    choice((
        token(Token::ArrowRight).to(Arrow::Right),
        token(Token::ArrowLeft).to(Arrow::Left),
        token(Token::ArrowBoth).to(Arrow::Both),
    ))
}

/// A keyword, an arrow, or a keyword followed by an arrow
fn connection() -> impl Parser<Token, Connection, Error = ParserError> + Clone {
    choice((
        relationship_keyword()
            .then(arrow().or_not())
            .map(|(keyword, arrow)| Connection {
                keyword: Some(keyword),
                arrow,
            }),
        arrow().map(|arrow| Connection {
            keyword: None,
            arrow: Some(arrow),
        }),
    ))
}

fn endpoint() -> impl Parser<Token, Endpoint, Error = ParserError> + Clone {
    roles()
        .or_not()
        .then(ident())
        .then(roles().or_not())
        .map_with_span(|((before, name), after), span| Endpoint {
            name,
            roles_before: before.unwrap_or_default(),
            roles_after: after.unwrap_or_default(),
            span,
        })
}

fn relationship_attribute(attr: Attribute) -> RelationshipAttribute {
    let key = attr.key.clone();
    let value = attr.value().map(str::to_string);
    match (key.as_str(), value) {
        ("type", Some(value)) => RelationshipAttribute::Type(value),
        ("implementationTechnology", Some(value)) => {
            RelationshipAttribute::ImplementationTechnology(value)
        }
        _ => RelationshipAttribute::Other(attr),
    }
}

fn relationship() -> impl Parser<Token, RelationshipDecl, Error = ParserError> + Clone {
    let stray = filter(|t: &Token| !t.is_brace()).ignored();
    let attributes = attribute()
        .map(|attr| Some(relationship_attribute(attr)))
        .or(stray.to(None))
        .repeated()
        .delimited_by(token(Token::LBrace), token(Token::RBrace))
        .map(|entries| entries.into_iter().flatten().collect::<Vec<_>>());

    endpoint()
        .then(connection())
        .then(endpoint())
        .then(token(Token::Colon).ignore_then(ident()).or_not())
        .then(attributes.or_not())
        .map_with_span(
            |((((left, connection), right), name), attributes), span| RelationshipDecl {
                left,
                connection,
                right,
                name,
                attributes: attributes.unwrap_or_default(),
                span,
            },
        )
}

fn map_entry() -> impl Parser<Token, MapEntry, Error = ParserError> + Clone {
    let contains = keyword("contains")
        .ignore_then(references())
        .map(|refs| MapEntry::Setting(ContextMapSetting::Contains(refs)));

    let setting = attribute().map(|attr| {
        let key = attr.key.clone();
        let value = attr.value().map(str::to_string);
        let setting = match (key.as_str(), value) {
            ("type", Some(value)) => ContextMapSetting::Type(value),
            ("state", Some(value)) => ContextMapSetting::State(value),
            _ => ContextMapSetting::Attribute(attr),
        };
        MapEntry::Setting(setting)
    });

    choice((
        contains,
        setting,
        relationship().map(MapEntry::Relationship),
    ))
}

/// `ContextMap [<name>] { <entries> }`
pub(crate) fn context_map() -> impl Parser<Token, ContextMapDecl, Error = ParserError> + Clone {
    keyword("ContextMap")
        .ignore_then(ident().or_not())
        .then(
            map_entry()
                .repeated()
                .delimited_by(token(Token::LBrace), token(Token::RBrace)),
        )
        .map_with_span(|(name, entries), span| {
            let mut map = ContextMapDecl {
                name,
                settings: Vec::new(),
                relationships: Vec::new(),
                span,
            };
            for entry in entries {
                match entry {
                    MapEntry::Setting(setting) => map.settings.push(setting),
                    MapEntry::Relationship(relationship) => map.relationships.push(relationship),
                }
            }
            map
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cml::lexing::tokenize;
    use chumsky::Stream;

    fn parse_map(source: &str) -> Result<ContextMapDecl, Vec<ParserError>> {
        let tokens = tokenize(source).unwrap();
        let len = source.len();
        context_map()
            .then_ignore(end())
            .parse(Stream::from_iter(len..len, tokens.into_iter()))
    }

    #[test]
    fn test_settings_and_membership() {
        let map = parse_map("ContextMap Insurance { type = ORGANIZATIONAL state = TO_BE contains A, B }")
            .unwrap();

        assert_eq!(map.name.as_deref(), Some("Insurance"));
        assert_eq!(
            map.settings[0],
            ContextMapSetting::Type("ORGANIZATIONAL".into())
        );
        assert_eq!(map.settings[1], ContextMapSetting::State("TO_BE".into()));
        match &map.settings[2] {
            ContextMapSetting::Contains(refs) => {
                let names: Vec<_> = refs.iter().map(|r| r.name.as_str()).collect();
                assert_eq!(names, vec!["A", "B"]);
            }
            other => panic!("expected contains, got {:?}", other),
        }
    }

    #[test]
    fn test_anonymous_map() {
        let map = parse_map("ContextMap {}").unwrap();
        assert_eq!(map.name, None);
        assert!(map.settings.is_empty());
    }

    #[test]
    fn test_relationship_with_roles_on_both_sides() {
        let map = parse_map("ContextMap { A [U,OHS]->[D,ACL] B }").unwrap();
        let rel = &map.relationships[0];

        assert_eq!(rel.left.name, "A");
        assert_eq!(rel.left.roles_after, vec!["U", "OHS"]);
        assert!(rel.left.roles_before.is_empty());
        assert_eq!(rel.right.roles_before, vec!["D", "ACL"]);
        assert_eq!(rel.connection.arrow, Some(Arrow::Right));
        assert_eq!(rel.connection.keyword, None);
    }

    #[test]
    fn test_keyword_relationship_with_name_and_attributes() {
        let source = r#"ContextMap {
            Policies [P] Partnership [P] Risk : RiskSharing {
                implementationTechnology = "RabbitMQ"
                type = Shared-Kernel
                exposedAggregates = Policy
            }
        }"#;
        let map = parse_map(source).unwrap();
        let rel = &map.relationships[0];

        assert_eq!(rel.connection.keyword.as_deref(), Some("Partnership"));
        assert_eq!(rel.name.as_deref(), Some("RiskSharing"));
        assert_eq!(
            rel.attributes[0],
            RelationshipAttribute::ImplementationTechnology("RabbitMQ".into())
        );
        assert_eq!(
            rel.attributes[1],
            RelationshipAttribute::Type("Shared-Kernel".into())
        );
        assert!(matches!(rel.attributes[2], RelationshipAttribute::Other(_)));
    }

    #[test]
    fn test_trailing_roles_bind_to_preceding_endpoint() {
        let map = parse_map("ContextMap { A -> B [U] C -> D }").unwrap();

        assert_eq!(map.relationships.len(), 2);
        assert_eq!(map.relationships[0].right.roles_after, vec!["U"]);
        assert!(map.relationships[1].left.roles_before.is_empty());
    }

    #[test]
    fn test_unclosed_map_is_an_error() {
        assert!(parse_map("ContextMap { invalid").is_err());
        assert!(parse_map("ContextMap { A B }").is_err());
    }
}
