//! Second pass: resolve names into links
//!
//! The linker walks the top-level elements again and resolves every name they mention against
//! the registry of the first pass. Nothing is looked up in the tree: a subdomain or context that
//! pass one did not register does not exist.
//!
//! - `implements` links a context and a subdomain in both directions
//! - `contains` adds contexts to the map's membership
//! - a relationship is added when both endpoints resolve; both endpoints then join the
//!   membership
//!
//! Membership is ordered by first insertion and never holds a context twice. A context's map is
//! the last map that added it.
//!
//! Names that resolve to nothing are dropped from the graph and reported, as warnings or
//! errors depending on [`ReferencePolicy`](super::ReferencePolicy).

use super::classify::{classify, implementation_technology};
use super::registry::{Registered, Registry};
use super::Sink;
use crate::cml::ast::{
    BoundedContextDecl, ContextMapDecl, ContextMapSetting, Element, Reference, SyntaxTree,
};
use crate::cml::diagnostics::codes;
use crate::cml::model::{ContextId, ContextMapId, Relationship};

pub(crate) fn link(tree: &SyntaxTree, registry: &mut Registry, sink: &mut Sink<'_>) {
    let elements = registry.elements.clone();
    for (element, registered) in tree.elements.iter().zip(elements) {
        match (element, registered) {
            (Element::BoundedContext(decl), Registered::Context(id)) => {
                link_implements(registry, decl, id, sink)
            }
            (Element::ContextMap(decl), Registered::ContextMap(id)) => {
                link_context_map(registry, decl, id, sink)
            }
            _ => {}
        }
    }

    let relationships: usize = registry
        .model
        .context_maps
        .iter()
        .map(|m| m.relationships.len())
        .sum();
    tracing::debug!(relationships, "linked references");
}

fn unresolved(sink: &mut Sink<'_>, what: &str, reference: &Reference, owner: &str) {
    let severity = sink.options.reference_severity();
    sink.report(
        severity,
        codes::UNRESOLVED_REFERENCE,
        format!("Unresolved {} '{}' in {}", what, reference.name, owner),
        &reference.span,
    );
}

fn link_implements(
    registry: &mut Registry,
    decl: &BoundedContextDecl,
    context: ContextId,
    sink: &mut Sink<'_>,
) {
    for reference in &decl.implements {
        let Some(subdomain) = registry.subdomain(&reference.name) else {
            unresolved(
                sink,
                "subdomain",
                reference,
                &format!("bounded context '{}'", decl.name),
            );
            continue;
        };

        let model = &mut registry.model;
        if !model.contexts[context.0].implements.contains(&subdomain) {
            model.contexts[context.0].implements.push(subdomain);
        }
        if !model.subdomains[subdomain.0].implementations.contains(&context) {
            model.subdomains[subdomain.0].implementations.push(context);
        }
        tracing::trace!(context = %decl.name, subdomain = %reference.name, "linked implements");
    }
}

fn add_member(registry: &mut Registry, map: ContextMapId, context: ContextId) {
    registry.model.context_maps[map.0].contexts.insert(context);
    registry.model.contexts[context.0].context_map = Some(map);
}

fn link_context_map(
    registry: &mut Registry,
    decl: &ContextMapDecl,
    map: ContextMapId,
    sink: &mut Sink<'_>,
) {
    let owner = match &decl.name {
        Some(name) => format!("context map '{}'", name),
        None => "context map".to_string(),
    };

    for setting in &decl.settings {
        let ContextMapSetting::Contains(references) = setting else {
            continue;
        };
        for reference in references {
            match registry.context(&reference.name) {
                Some(context) => add_member(registry, map, context),
                None => unresolved(sink, "bounded context", reference, &owner),
            }
        }
    }

    for relationship in &decl.relationships {
        let left = registry.context(&relationship.left.name);
        let right = registry.context(&relationship.right.name);

        let (Some(left), Some(right)) = (left, right) else {
            for endpoint in [&relationship.left, &relationship.right] {
                if registry.context(&endpoint.name).is_none() {
                    let reference = Reference {
                        name: endpoint.name.clone(),
                        span: endpoint.span.clone(),
                    };
                    unresolved(sink, "relationship endpoint", &reference, &owner);
                }
            }
            continue;
        };

        add_member(registry, map, left);
        add_member(registry, map, right);

        let classification = classify(relationship);
        tracing::trace!(
            left = %relationship.left.name,
            right = %relationship.right.name,
            label = %classification.label,
            "linked relationship"
        );
        registry.model.context_maps[map.0]
            .relationships
            .push(Relationship {
                left,
                right,
                relationship_type: classification.label,
                roles: classification.roles,
                name: relationship.name.clone(),
                implementation_technology: implementation_technology(relationship),
            });
    }
}
