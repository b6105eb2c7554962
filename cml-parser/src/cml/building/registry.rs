//! First pass: create every entity and index it by name
//!
//! Each top-level declaration is turned into its entity with defaults and overrides applied.
//! Nested subdomains, aggregates and services are collected with the [walker](super::walker),
//! so they are found at any depth. No cross reference is followed here; `implements`,
//! `contains` and relationship endpoints are left for the [linker](super::linker), which only
//! consults what this pass registered.
//!
//! The pass also remembers which entity it created for which top-level element. The linker
//! uses that instead of looking declarations up by name again, so a shadowed duplicate still
//! gets its own links.

use std::collections::HashMap;

use super::overrides::{self, Settings};
use super::walker::find_all;
use super::Sink;
use crate::cml::ast::{
    BodyEntry, BoundedContextDecl, ContextMapDecl, DomainDecl, DomainObjectKind, Element,
    NodeKind, NodeRef, Span, SubdomainDecl, SyntaxTree, UseCaseDecl, UseCaseElement,
};
use crate::cml::diagnostics::codes;
use crate::cml::model::{
    Aggregate, Cml, Context, ContextId, ContextMap, ContextMapId, Domain, DomainId, Entity,
    Service, Subdomain, SubdomainId, SubdomainType, UseCase, UseCaseId,
};

/// The entity created for a top-level element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registered {
    Domain(DomainId),
    Context(ContextId),
    ContextMap(ContextMapId),
    UseCase(UseCaseId),
    /// Blocks the builder does not read
    Skipped,
}

/// Entities of the first pass and their name indexes
#[derive(Debug, Default)]
pub struct Registry {
    pub model: Cml,
    /// One entry per top-level element, in element order
    pub elements: Vec<Registered>,
    pub domains: HashMap<String, DomainId>,
    pub subdomains: HashMap<String, SubdomainId>,
    pub contexts: HashMap<String, ContextId>,
    pub context_maps: HashMap<String, ContextMapId>,
    pub use_cases: HashMap<String, UseCaseId>,
}

impl Registry {
    pub fn subdomain(&self, name: &str) -> Option<SubdomainId> {
        self.subdomains.get(name).copied()
    }

    pub fn context(&self, name: &str) -> Option<ContextId> {
        self.contexts.get(name).copied()
    }
}

pub(crate) fn register(tree: &SyntaxTree, sink: &mut Sink<'_>) -> Registry {
    let mut registry = Registry::default();

    for element in &tree.elements {
        let registered = match element {
            Element::Domain(decl) => Registered::Domain(register_domain(&mut registry, decl, sink)),
            Element::BoundedContext(decl) => {
                Registered::Context(register_context(&mut registry, decl, sink))
            }
            Element::ContextMap(decl) => {
                Registered::ContextMap(register_context_map(&mut registry, decl, sink))
            }
            Element::UseCase(decl) => {
                Registered::UseCase(register_use_case(&mut registry, decl, sink))
            }
            Element::Other(block) => {
                tracing::trace!(keyword = %block.keyword, "skipping block");
                Registered::Skipped
            }
        };
        registry.elements.push(registered);
    }

    tracing::debug!(
        domains = registry.model.domains.len(),
        subdomains = registry.model.subdomains.len(),
        contexts = registry.model.contexts.len(),
        context_maps = registry.model.context_maps.len(),
        use_cases = registry.model.use_cases.len(),
        "registered entities"
    );
    registry
}

/// Index `name`, reporting a duplicate when it was already taken
fn index<I: Copy>(
    names: &mut HashMap<String, I>,
    name: &str,
    id: I,
    what: &str,
    span: &Span,
    sink: &mut Sink<'_>,
) {
    if names.insert(name.to_string(), id).is_some() {
        let severity = sink.options.duplicate_severity();
        sink.report(
            severity,
            codes::DUPLICATE_NAME,
            format!(
                "Duplicate {} '{}'; the later declaration shadows the earlier one",
                what, name
            ),
            span,
        );
    }
}

fn register_domain(registry: &mut Registry, decl: &DomainDecl, sink: &mut Sink<'_>) -> DomainId {
    let id = DomainId(registry.model.domains.len());
    let settings = Settings::fold(overrides::domain_overrides(&decl.body));
    registry.model.domains.push(Domain {
        id,
        name: decl.name.clone(),
        vision: settings.vision,
        subdomains: Vec::new(),
    });
    index(&mut registry.domains, &decl.name, id, "domain", &decl.span, sink);
    tracing::trace!(name = %decl.name, %id, "registered domain");

    for node in find_all(NodeRef::Domain(decl), NodeKind::Subdomain) {
        if let NodeRef::Subdomain(subdomain) = node {
            let subdomain_id = register_subdomain(registry, subdomain, id, sink);
            registry.model.domains[id.0].subdomains.push(subdomain_id);
        }
    }
    id
}

fn register_subdomain(
    registry: &mut Registry,
    decl: &SubdomainDecl,
    domain: DomainId,
    sink: &mut Sink<'_>,
) -> SubdomainId {
    let id = SubdomainId(registry.model.subdomains.len());
    let settings = Settings::fold(overrides::subdomain_overrides(&decl.body));

    let subdomain_type = match settings.type_literal.as_deref() {
        None => SubdomainType::default(),
        Some(literal) => SubdomainType::from_literal(literal).unwrap_or_else(|| {
            sink.report_warning(
                codes::UNKNOWN_SUBDOMAIN_TYPE,
                format!(
                    "Unknown type '{}' for subdomain '{}'; using {}",
                    literal,
                    decl.name,
                    SubdomainType::Generic
                ),
                settings.type_span.as_ref().unwrap_or(&decl.span),
            );
            SubdomainType::Generic
        }),
    };

    let mut entities: Vec<Entity> = decl
        .body
        .entries
        .iter()
        .filter_map(|entry| match entry {
            BodyEntry::DomainObject(object) if object.kind == DomainObjectKind::Entity => {
                Some(object.name.clone())
            }
            BodyEntry::Entity(entity) => Some(entity.name.clone()),
            _ => None,
        })
        .map(|name| Entity { name })
        .collect();
    entities.extend(decl.entities.iter().map(|e| Entity {
        name: e.name.clone(),
    }));

    registry.model.subdomains.push(Subdomain {
        id,
        name: decl.name.clone(),
        subdomain_type,
        vision: settings.vision,
        entities,
        domain,
        implementations: Vec::new(),
    });
    index(&mut registry.subdomains, &decl.name, id, "subdomain", &decl.span, sink);
    tracing::trace!(name = %decl.name, %id, %subdomain_type, "registered subdomain");
    id
}

fn register_context(
    registry: &mut Registry,
    decl: &BoundedContextDecl,
    sink: &mut Sink<'_>,
) -> ContextId {
    let id = ContextId(registry.model.contexts.len());
    let settings = Settings::fold(overrides::context_overrides(&decl.body));

    let mut context = Context::new(id, decl.name.clone());
    if let Some(context_type) = settings.type_literal {
        context.context_type = context_type;
    }
    context.vision = settings.vision;
    context.responsibilities = settings.responsibilities.unwrap_or_default();
    context.implementation_technology = settings.implementation_technology;
    context.knowledge_level = settings.knowledge_level;

    let root = NodeRef::BoundedContext(decl);
    context.aggregates = find_all(root, NodeKind::Aggregate)
        .iter()
        .filter_map(|node| node.name())
        .map(|name| Aggregate {
            name: name.to_string(),
        })
        .collect();
    context.services = find_all(root, NodeKind::Service)
        .iter()
        .filter_map(|node| node.name())
        .map(|name| Service {
            name: name.to_string(),
        })
        .collect();

    tracing::trace!(
        name = %decl.name,
        %id,
        aggregates = context.aggregates.len(),
        services = context.services.len(),
        "registered bounded context"
    );
    registry.model.contexts.push(context);
    index(&mut registry.contexts, &decl.name, id, "bounded context", &decl.span, sink);
    id
}

fn register_context_map(
    registry: &mut Registry,
    decl: &ContextMapDecl,
    sink: &mut Sink<'_>,
) -> ContextMapId {
    let id = ContextMapId(registry.model.context_maps.len());
    let settings = Settings::fold(overrides::map_overrides(&decl.settings));

    let mut map = ContextMap::new(id, decl.name.clone());
    if let Some(map_type) = settings.type_literal {
        map.map_type = map_type;
    }
    if let Some(state) = settings.state {
        map.state = state;
    }
    registry.model.context_maps.push(map);

    if let Some(name) = &decl.name {
        index(&mut registry.context_maps, name, id, "context map", &decl.span, sink);
    }
    tracing::trace!(name = ?decl.name, %id, "registered context map");
    id
}

fn register_use_case(
    registry: &mut Registry,
    decl: &UseCaseDecl,
    sink: &mut Sink<'_>,
) -> UseCaseId {
    let id = UseCaseId(registry.model.use_cases.len());
    let mut use_case = UseCase {
        id,
        name: decl.name.clone(),
        actor: None,
        secondary_actors: Vec::new(),
        benefit: None,
        scope: None,
        level: None,
    };

    for element in &decl.elements {
        match element {
            UseCaseElement::Actor(actor) => use_case.actor = Some(actor.clone()),
            UseCaseElement::SecondaryActors(actors) => use_case.secondary_actors = actors.clone(),
            UseCaseElement::Benefit(benefit) => use_case.benefit = Some(benefit.clone()),
            UseCaseElement::Scope(scope) => use_case.scope = Some(scope.clone()),
            UseCaseElement::Level(level) => use_case.level = Some(level.clone()),
            UseCaseElement::Other(_) => {}
        }
    }

    registry.model.use_cases.push(use_case);
    index(&mut registry.use_cases, &decl.name, id, "use case", &decl.span, sink);
    tracing::trace!(name = %decl.name, %id, "registered use case");
    id
}
