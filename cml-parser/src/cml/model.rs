//! The semantic model
//!
//! [`Cml`] owns one arena per entity kind. Entities refer to each other through the typed ids in
//! [`ids`], so the graph has no shared ownership and no cycles of references: a subdomain knows
//! the contexts implementing it by id, and the contexts know the subdomain the same way.
//!
//! Name lookups return the entity declared last under that name. Earlier declarations with the
//! same name stay in their arena, reachable by id or by iteration.
//!
//! The model is rebuilt from scratch on every parse; nothing in it is updated incrementally.

pub mod entities;
pub mod ids;
pub mod relationship_type;
pub mod views;

use serde::Serialize;
use std::ops::Index;

pub use entities::{
    Aggregate, Context, ContextMap, Domain, Entity, Relationship, Service, Subdomain,
    SubdomainType, UseCase,
};
pub use ids::{ContextId, ContextMapId, DomainId, SubdomainId, UseCaseId};
pub use relationship_type::RelationshipType;
pub use views::{ContextMapRef, ContextRef, DomainRef, RelationshipRef, SubdomainRef};

/// A linked CML model
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cml {
    pub domains: Vec<Domain>,
    pub subdomains: Vec<Subdomain>,
    pub contexts: Vec<Context>,
    pub context_maps: Vec<ContextMap>,
    pub use_cases: Vec<UseCase>,
}

impl Cml {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
            && self.contexts.is_empty()
            && self.context_maps.is_empty()
            && self.use_cases.is_empty()
    }

    pub fn domain(&self, name: &str) -> Option<DomainRef<'_>> {
        self.domains
            .iter()
            .rev()
            .find(|d| d.name == name)
            .map(|d| DomainRef::new(self, d))
    }

    pub fn domains(&self) -> impl Iterator<Item = DomainRef<'_>> {
        self.domains.iter().map(move |d| DomainRef::new(self, d))
    }

    /// Subdomain by name, across all domains
    pub fn subdomain(&self, name: &str) -> Option<SubdomainRef<'_>> {
        self.subdomains
            .iter()
            .rev()
            .find(|s| s.name == name)
            .map(|s| SubdomainRef::new(self, s))
    }

    pub fn subdomains(&self) -> impl Iterator<Item = SubdomainRef<'_>> {
        self.subdomains
            .iter()
            .map(move |s| SubdomainRef::new(self, s))
    }

    pub fn context(&self, name: &str) -> Option<ContextRef<'_>> {
        self.contexts
            .iter()
            .rev()
            .find(|c| c.name == name)
            .map(|c| ContextRef::new(self, c))
    }

    pub fn contexts(&self) -> impl Iterator<Item = ContextRef<'_>> {
        self.contexts.iter().map(move |c| ContextRef::new(self, c))
    }

    /// Context map by name; anonymous maps are only reachable through [`Cml::context_maps`]
    pub fn context_map(&self, name: &str) -> Option<ContextMapRef<'_>> {
        self.context_maps
            .iter()
            .rev()
            .find(|m| m.name.as_deref() == Some(name))
            .map(|m| ContextMapRef::new(self, m))
    }

    pub fn context_maps(&self) -> impl Iterator<Item = ContextMapRef<'_>> {
        self.context_maps
            .iter()
            .map(move |m| ContextMapRef::new(self, m))
    }

    pub fn use_case(&self, name: &str) -> Option<&UseCase> {
        self.use_cases.iter().rev().find(|u| u.name == name)
    }

    pub fn domain_by_id(&self, id: DomainId) -> DomainRef<'_> {
        DomainRef::new(self, &self[id])
    }

    pub fn subdomain_by_id(&self, id: SubdomainId) -> SubdomainRef<'_> {
        SubdomainRef::new(self, &self[id])
    }

    pub fn context_by_id(&self, id: ContextId) -> ContextRef<'_> {
        ContextRef::new(self, &self[id])
    }

    pub fn context_map_by_id(&self, id: ContextMapId) -> ContextMapRef<'_> {
        ContextMapRef::new(self, &self[id])
    }
}

macro_rules! arena_index {
    ($id:ty, $field:ident, $entity:ty) => {
        impl Index<$id> for Cml {
            type Output = $entity;

            fn index(&self, id: $id) -> &$entity {
                &self.$field[id.0]
            }
        }
    };
}

arena_index!(DomainId, domains, Domain);
arena_index!(SubdomainId, subdomains, Subdomain);
arena_index!(ContextId, contexts, Context);
arena_index!(ContextMapId, context_maps, ContextMap);
arena_index!(UseCaseId, use_cases, UseCase);

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexSet;

    fn sample() -> Cml {
        let mut model = Cml::new();
        model.domains.push(Domain {
            id: DomainId(0),
            name: "Insurance".into(),
            vision: None,
            subdomains: vec![SubdomainId(0), SubdomainId(1)],
        });
        for (i, (name, subdomain_type)) in [
            ("Claims", SubdomainType::Core),
            ("Billing", SubdomainType::Supporting),
        ]
        .into_iter()
        .enumerate()
        {
            model.subdomains.push(Subdomain {
                id: SubdomainId(i),
                name: name.into(),
                subdomain_type,
                vision: None,
                entities: vec![Entity {
                    name: format!("{}Item", name),
                }],
                domain: DomainId(0),
                implementations: Vec::new(),
            });
        }
        let mut claims = Context::new(ContextId(0), "ClaimsContext");
        claims.implements.push(SubdomainId(0));
        claims.context_map = Some(ContextMapId(0));
        claims.aggregates.push(Aggregate {
            name: "Claim".into(),
        });
        model.subdomains[0].implementations.push(ContextId(0));
        model.contexts.push(claims);
        model.contexts.push(Context::new(ContextId(1), "BillingContext"));

        let mut map = ContextMap::new(ContextMapId(0), Some("Landscape".into()));
        map.contexts.extend([ContextId(0), ContextId(1)]);
        map.relationships.push(Relationship {
            left: ContextId(0),
            right: ContextId(1),
            relationship_type: "Upstream-Downstream".into(),
            roles: IndexSet::from(["U".to_string(), "OHS".to_string(), "D".to_string()]),
            name: None,
            implementation_technology: None,
        });
        model.context_maps.push(map);
        model
    }

    #[test]
    fn test_navigation_through_views() {
        let model = sample();
        let domain = model.domain("Insurance").unwrap();

        assert_eq!(domain.core().len(), 1);
        assert_eq!(domain.supporting()[0].name, "Billing");
        assert!(domain.generic().is_empty());

        let claims = domain.subdomain("Claims").unwrap();
        assert!(claims.entity("ClaimsItem").is_some());
        assert_eq!(claims.domain().name, "Insurance");
        let context = claims.implementation("ClaimsContext").unwrap();
        assert_eq!(context.subdomain("Claims").unwrap().name, "Claims");
        assert!(context.aggregate("Claim").is_some());
        assert!(context.service("Claim").is_none());
        assert_eq!(
            context.context_map().and_then(|m| m.get().name.clone()),
            Some("Landscape".to_string())
        );
    }

    #[test]
    fn test_context_map_queries() {
        let model = sample();
        let map = model.context_map("Landscape").unwrap();

        assert_eq!(map.context("BillingContext").unwrap().id, ContextId(1));
        assert_eq!(map.context_relationships("BillingContext").len(), 1);
        assert_eq!(map.relationships_by_type("upstream-downstream").len(), 1);
        assert_eq!(map.relationships_by_type(RelationshipType::Ohs).len(), 1);
        assert!(map.relationships_by_type("Partnership").is_empty());

        let rel = map.relationship("BillingContext", "ClaimsContext").unwrap();
        assert_eq!(rel.left().name, "ClaimsContext");
        assert!(rel.has_role("U"));
    }

    #[test]
    fn test_lookup_returns_last_declaration() {
        let mut model = sample();
        model.contexts.push(Context::new(ContextId(2), "ClaimsContext"));

        assert_eq!(model.context("ClaimsContext").unwrap().id, ContextId(2));
        assert_eq!(model.contexts().count(), 3);
        assert_eq!(model[ContextId(0)].name, "ClaimsContext");
    }

    #[test]
    fn test_serializes_type_fields() {
        let model = sample();
        let json = serde_json::to_value(&model).unwrap();

        assert_eq!(json["subdomains"][0]["type"], "CORE_DOMAIN");
        assert_eq!(json["contexts"][0]["type"], "FEATURE");
        assert_eq!(json["context_maps"][0]["contexts"], serde_json::json!([0, 1]));
        assert_eq!(
            json["context_maps"][0]["relationships"][0]["roles"],
            serde_json::json!(["U", "OHS", "D"])
        );
    }
}
