//! Relationship classification
//!
//! A relationship declaration can state its kind in several ways at once: a keyword between the
//! endpoints (`A Partnership B`), an arrow (`A -> B`), a `type` attribute in its body, and role
//! lists around either endpoint (`A [U,OHS]->[D,ACL] B`). The type label is taken from the first
//! of these that is present:
//!
//! 1. the keyword
//! 2. the first `type` attribute
//! 3. the arrow literal, for a bare arrow connector
//! 4. `Upstream-Downstream`, when the roles contain both `U` and `D`
//! 5. `Unknown`
//!
//! Roles are collected independently of the label: every role from both endpoints, before and
//! after the name, upper-cased, first occurrence kept.

use indexmap::IndexSet;

use crate::cml::ast::{RelationshipAttribute, RelationshipDecl};
use crate::cml::model::entities::UNKNOWN_RELATIONSHIP;
use crate::cml::model::RelationshipType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub label: String,
    pub roles: IndexSet<String>,
}

pub fn classify(decl: &RelationshipDecl) -> Classification {
    let roles: IndexSet<String> = [&decl.left, &decl.right]
        .into_iter()
        .flat_map(|endpoint| endpoint.roles_before.iter().chain(&endpoint.roles_after))
        .map(|role| role.to_uppercase())
        .collect();

    let attribute_type = decl.attributes.iter().find_map(|attr| match attr {
        RelationshipAttribute::Type(t) if !t.is_empty() => Some(t.as_str()),
        _ => None,
    });

    let label = if let Some(keyword) = &decl.connection.keyword {
        keyword.clone()
    } else if let Some(t) = attribute_type {
        t.to_string()
    } else if let Some(arrow) = decl.arrow_connector() {
        arrow.as_str().to_string()
    } else if roles.contains(RelationshipType::U.as_str())
        && roles.contains(RelationshipType::D.as_str())
    {
        RelationshipType::UpstreamDownstream.as_str().to_string()
    } else {
        UNKNOWN_RELATIONSHIP.to_string()
    };

    Classification { label, roles }
}

/// First `implementationTechnology` attribute of a relationship
pub fn implementation_technology(decl: &RelationshipDecl) -> Option<String> {
    decl.attributes.iter().find_map(|attr| match attr {
        RelationshipAttribute::ImplementationTechnology(t) => Some(t.clone()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cml::ast::{Arrow, Connection, Endpoint};
    use proptest::prelude::*;
    use rstest::rstest;

    fn roles(set: &IndexSet<String>) -> Vec<&str> {
        set.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_keyword_wins_over_roles() {
        let mut decl = RelationshipDecl::keyword("A", "Partnership", "B");
        decl.left = decl.left.after(&["U"]);
        decl.right = decl.right.before(&["d"]);

        let c = classify(&decl);
        assert_eq!(c.label, "Partnership");
        assert_eq!(roles(&c.roles), vec!["U", "D"]);
    }

    #[test]
    fn test_roles_merge_from_every_position() {
        let decl = RelationshipDecl::new(
            Endpoint::new("A").before(&["ohs"]).after(&["U", "C"]),
            Connection::default(),
            Endpoint::new("B").before(&["D", "S"]).after(&["U"]),
        );

        let c = classify(&decl);
        assert_eq!(roles(&c.roles), vec!["OHS", "U", "C", "D", "S"]);
        assert_eq!(c.label, "Upstream-Downstream");
    }

    #[rstest]
    #[case::keyword_beats_everything(Some("Shared-Kernel"), Some("Partnership"), Some(Arrow::Right), "Shared-Kernel")]
    #[case::attribute_beats_arrow(None, Some("Partnership"), Some(Arrow::Both), "Partnership")]
    #[case::arrow_literal(None, None, Some(Arrow::Left), "<-")]
    #[case::roles(None, None, None, "Upstream-Downstream")]
    fn test_precedence(
        #[case] keyword: Option<&str>,
        #[case] attribute: Option<&str>,
        #[case] arrow: Option<Arrow>,
        #[case] expected: &str,
    ) {
        let mut decl = RelationshipDecl::new(
            Endpoint::new("A").before(&["U"]),
            Connection {
                keyword: keyword.map(str::to_string),
                arrow,
            },
            Endpoint::new("B").after(&["D"]),
        );
        if let Some(t) = attribute {
            decl = decl
                .with_attribute(RelationshipAttribute::ImplementationTechnology("REST".into()))
                .with_attribute(RelationshipAttribute::Type(t.into()))
                .with_attribute(RelationshipAttribute::Type("Ignored".into()));
        }

        assert_eq!(classify(&decl).label, expected);
    }

    #[test]
    fn test_role_notation_arrow_defers_to_roles() {
        let decl = RelationshipDecl::new(
            Endpoint::new("A").after(&["U", "C"]),
            Connection {
                keyword: None,
                arrow: Some(Arrow::Right),
            },
            Endpoint::new("B").before(&["D", "S"]),
        );
        assert_eq!(classify(&decl).label, "Upstream-Downstream");
    }

    #[test]
    fn test_unknown_without_upstream_and_downstream() {
        let decl = RelationshipDecl::new(
            Endpoint::new("A").after(&["U"]),
            Connection::default(),
            Endpoint::new("B").before(&["ACL"]),
        );
        assert_eq!(classify(&decl).label, "Unknown");
    }

    #[test]
    fn test_implementation_technology() {
        let decl = RelationshipDecl::arrow("A", Arrow::Right, "B")
            .with_attribute(RelationshipAttribute::ImplementationTechnology("gRPC".into()));
        assert_eq!(implementation_technology(&decl).as_deref(), Some("gRPC"));
    }

    fn role() -> impl Strategy<Value = String> {
        prop::sample::select(vec!["U", "D", "u", "d", "OHS", "acl", "CF", "PL", "SK", "C", "S"])
            .prop_map(str::to_string)
    }

    proptest! {
        #[test]
        fn prop_roles_are_uppercased_union(
            lb in prop::collection::vec(role(), 0..4),
            la in prop::collection::vec(role(), 0..4),
            rb in prop::collection::vec(role(), 0..4),
            ra in prop::collection::vec(role(), 0..4),
        ) {
            let decl = RelationshipDecl::new(
                Endpoint { roles_before: lb.clone(), roles_after: la.clone(), ..Endpoint::new("A") },
                Connection::default(),
                Endpoint { roles_before: rb.clone(), roles_after: ra.clone(), ..Endpoint::new("B") },
            );
            let c = classify(&decl);

            for r in lb.iter().chain(&la).chain(&rb).chain(&ra) {
                prop_assert!(c.roles.contains(&r.to_uppercase()));
            }
            prop_assert!(c.roles.iter().all(|r| *r == r.to_uppercase()));

            let has_u_and_d = c.roles.contains("U") && c.roles.contains("D");
            prop_assert_eq!(
                c.label.as_str(),
                if has_u_and_d { "Upstream-Downstream" } else { "Unknown" }
            );
        }

        #[test]
        fn prop_keyword_always_wins(
            keyword in "[A-Z][a-z]+(-[A-Z][a-z]+)?",
            arrow in prop::option::of(prop::sample::select(vec![Arrow::Right, Arrow::Left, Arrow::Both])),
        ) {
            let decl = RelationshipDecl::new(
                Endpoint::new("A").after(&["U"]),
                Connection { keyword: Some(keyword.clone()), arrow },
                Endpoint::new("B").before(&["D"]),
            )
            .with_attribute(RelationshipAttribute::Type("Partnership".into()));

            prop_assert_eq!(classify(&decl).label, keyword);
        }
    }
}
