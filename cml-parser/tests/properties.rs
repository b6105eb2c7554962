//! Properties of the built model that hold for any input of a given shape

use cml_parser::cml::model::SubdomainType;
use cml_parser::cml::testing::assert_model;
use cml_parser::{parse_str, CmlError, CmlLoader};
use proptest::prelude::*;

#[test]
fn test_map_with_roles_on_both_sides() {
    let model = parse_str(
        "BoundedContext A\nBoundedContext B\nContextMap M { contains A, B  A [U,C]->[D,S] B }",
    )
    .unwrap();

    assert_model(&model).context_map("M", |m| {
        m.contexts(&["A", "B"])
            .relationship_count(1)
            .relationship_at(0, |r| {
                r.endpoints("A", "B")
                    .relationship_type("Upstream-Downstream")
                    .roles(&["U", "C", "D", "S"]);
            });
    });
}

#[test]
fn test_keyword_wins_over_upstream_downstream_roles() {
    let model = parse_str(
        "BoundedContext A\nBoundedContext B\nContextMap { A [U] Partnership [D] B }",
    )
    .unwrap();

    assert_model(&model).context_map_at(0, |m| {
        m.relationship_at(0, |r| {
            r.relationship_type("Partnership").roles(&["U", "D"]);
        });
    });
}

#[test]
fn test_later_vision_wins() {
    let model = parse_str(
        r#"BoundedContext A {
            domainVisionStatement = "first"
            domainVisionStatement = "second"
        }"#,
    )
    .unwrap();

    assert_model(&model).context("A", |c| {
        c.vision(Some("second"));
    });
}

#[test]
fn test_attribute_after_bodiless_subdomain_is_kept() {
    let result = CmlLoader::from_string(
        "Domain D {\n  Subdomain A\n  domainVisionStatement = \"v\"\n}",
    )
    .parse_safe();
    assert!(result.ok());
    assert!(result.warnings.is_empty());

    assert_model(&result.model_or_default()).domain("D", |d| {
        d.vision(Some("v")).subdomains(&["A"]);
    });
}

#[test]
fn test_attribute_after_bodiless_aggregate_is_kept() {
    let result = CmlLoader::from_string(
        "BoundedContext C {\n  Aggregate A\n  implementationTechnology = \"Rust\"\n}",
    )
    .parse_safe();
    assert!(result.ok());
    assert!(result.warnings.is_empty());

    assert_model(&result.model_or_default()).context("C", |c| {
        c.aggregates(&["A"]).implementation_technology(Some("Rust"));
    });
}

#[test]
fn test_header_clauses_still_parse_before_attributes() {
    let model = parse_str(
        "Domain D {\n  Subdomain A supports Claims, Payouts\n  domainVisionStatement = \"v\"\n}",
    )
    .unwrap();

    assert_model(&model).domain("D", |d| {
        d.vision(Some("v")).subdomains(&["A"]);
    });
}

#[test]
fn test_permissive_and_strict_modes_disagree_only_in_shape() {
    let source = "ContextMap { invalid";

    let result = CmlLoader::from_string(source).parse_safe();
    assert!(!result.ok());
    assert!(result.model.is_none());
    assert!(result.model_or_default().is_empty());
    assert!(!result.errors.is_empty());

    assert!(matches!(parse_str(source), Err(CmlError::Syntax(_))));
}

fn name() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,8}"
}

proptest! {
    #[test]
    fn prop_unknown_subdomain_type_degrades_to_generic(literal in "[A-Z][A-Z_]{2,12}") {
        prop_assume!(SubdomainType::from_literal(&literal).is_none());
        let source = format!("Domain D {{ Subdomain S {{ type = {} }} }}", literal);

        let result = CmlLoader::from_string(source).parse_safe();
        prop_assert!(result.ok());
        let model = result.model.unwrap();
        prop_assert_eq!(model.subdomain("S").unwrap().subdomain_type, SubdomainType::Generic);
        prop_assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn prop_relationship_endpoints_are_the_declared_contexts(
        names in prop::collection::hash_set(name(), 2..6),
        pick in any::<(prop::sample::Index, prop::sample::Index)>(),
    ) {
        let names: Vec<String> = names.into_iter().collect();
        let left = &names[pick.0.index(names.len())];
        let right = &names[pick.1.index(names.len())];

        let mut source: String = names
            .iter()
            .map(|n| format!("BoundedContext {}\n", n))
            .collect();
        source.push_str(&format!("ContextMap M {{ {} -> {} }}", left, right));

        let model = parse_str(&source).unwrap();
        let map = model.context_map("M").unwrap();
        let relationship = map.relationships().next().unwrap();
        prop_assert_eq!(&relationship.left().name, left);
        prop_assert_eq!(&relationship.right().name, right);
        prop_assert_eq!(relationship.left().id, model.context(left).unwrap().id);
    }

    #[test]
    fn prop_implements_links_are_mutual(
        subdomains in prop::collection::hash_set(name(), 1..5),
        links in prop::collection::vec(any::<prop::sample::Index>(), 0..8),
    ) {
        let subdomains: Vec<String> = subdomains.into_iter().collect();
        let mut source = String::from("Domain D {\n");
        for s in &subdomains {
            source.push_str(&format!("Subdomain {}\n", s));
        }
        source.push_str("}\n");
        for (i, link) in links.iter().enumerate() {
            source.push_str(&format!(
                "BoundedContext Ctx{} implements {}\n",
                i,
                subdomains[link.index(subdomains.len())]
            ));
        }

        let model = parse_str(&source).unwrap();
        for context in model.contexts() {
            for subdomain in context.implements() {
                prop_assert!(subdomain.implementations.contains(&context.id));
            }
        }
        for subdomain in model.subdomains() {
            for context in subdomain.implementations() {
                prop_assert!(context.implements.contains(&subdomain.id));
            }
        }
    }
}
