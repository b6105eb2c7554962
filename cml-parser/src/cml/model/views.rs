//! Borrowed views for navigating the model graph
//!
//! A view pairs an entity with the model that owns it, so ids can be followed in either
//! direction without the entities referencing each other. Views deref to the entity they wrap.

use std::ops::Deref;

use super::entities::{
    Aggregate, Context, ContextMap, Domain, Entity, Relationship, Service, Subdomain,
    SubdomainType,
};
use super::Cml;

macro_rules! view {
    ($(#[$meta:meta])* $name:ident, $field:ident: $target:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name<'a> {
            model: &'a Cml,
            $field: &'a $target,
        }

        impl<'a> $name<'a> {
            pub(crate) fn new(model: &'a Cml, $field: &'a $target) -> Self {
                Self { model, $field }
            }

            /// The wrapped entity, with the model's lifetime
            pub fn get(&self) -> &'a $target {
                self.$field
            }
        }

        impl Deref for $name<'_> {
            type Target = $target;

            fn deref(&self) -> &$target {
                self.$field
            }
        }
    };
}

view!(DomainRef, domain: Domain);
view!(SubdomainRef, subdomain: Subdomain);
view!(ContextRef, context: Context);
view!(ContextMapRef, map: ContextMap);
view!(RelationshipRef, relationship: Relationship);

impl<'a> DomainRef<'a> {
    pub fn subdomains(&self) -> impl Iterator<Item = SubdomainRef<'a>> + 'a {
        let model = self.model;
        self.domain
            .subdomains
            .iter()
            .map(move |id| SubdomainRef::new(model, &model[*id]))
    }

    fn of_type(&self, subdomain_type: SubdomainType) -> Vec<SubdomainRef<'a>> {
        self.subdomains()
            .filter(|s| s.subdomain_type == subdomain_type)
            .collect()
    }

    pub fn core(&self) -> Vec<SubdomainRef<'a>> {
        self.of_type(SubdomainType::Core)
    }

    pub fn supporting(&self) -> Vec<SubdomainRef<'a>> {
        self.of_type(SubdomainType::Supporting)
    }

    pub fn generic(&self) -> Vec<SubdomainRef<'a>> {
        self.of_type(SubdomainType::Generic)
    }

    pub fn subdomain(&self, name: &str) -> Option<SubdomainRef<'a>> {
        self.subdomains().find(|s| s.name == name)
    }
}

impl<'a> SubdomainRef<'a> {
    pub fn domain(&self) -> DomainRef<'a> {
        DomainRef::new(self.model, &self.model[self.subdomain.domain])
    }

    pub fn entity(&self, name: &str) -> Option<&'a Entity> {
        self.subdomain.entities.iter().find(|e| e.name == name)
    }

    pub fn implementations(&self) -> impl Iterator<Item = ContextRef<'a>> + 'a {
        let model = self.model;
        self.subdomain
            .implementations
            .iter()
            .map(move |id| ContextRef::new(model, &model[*id]))
    }

    pub fn implementation(&self, name: &str) -> Option<ContextRef<'a>> {
        self.implementations().find(|c| c.name == name)
    }
}

impl<'a> ContextRef<'a> {
    pub fn implements(&self) -> impl Iterator<Item = SubdomainRef<'a>> + 'a {
        let model = self.model;
        self.context
            .implements
            .iter()
            .map(move |id| SubdomainRef::new(model, &model[*id]))
    }

    pub fn subdomain(&self, name: &str) -> Option<SubdomainRef<'a>> {
        self.implements().find(|s| s.name == name)
    }

    pub fn aggregate(&self, name: &str) -> Option<&'a Aggregate> {
        self.context.aggregates.iter().find(|a| a.name == name)
    }

    pub fn service(&self, name: &str) -> Option<&'a Service> {
        self.context.services.iter().find(|s| s.name == name)
    }

    /// The map this context was last added to
    pub fn context_map(&self) -> Option<ContextMapRef<'a>> {
        let model = self.model;
        self.context.context_map.map(|id| model.context_map_by_id(id))
    }
}

impl<'a> ContextMapRef<'a> {
    pub fn contexts(&self) -> impl Iterator<Item = ContextRef<'a>> + 'a {
        let model = self.model;
        self.map
            .contexts
            .iter()
            .map(move |id| ContextRef::new(model, &model[*id]))
    }

    pub fn context(&self, name: &str) -> Option<ContextRef<'a>> {
        self.contexts().find(|c| c.name == name)
    }

    pub fn relationships(&self) -> impl Iterator<Item = RelationshipRef<'a>> + 'a {
        let model = self.model;
        self.map
            .relationships
            .iter()
            .map(move |r| RelationshipRef::new(model, r))
    }

    /// Relationships with `name` on either side
    pub fn context_relationships(&self, name: &str) -> Vec<RelationshipRef<'a>> {
        self.relationships()
            .filter(|r| r.left().name == name || r.right().name == name)
            .collect()
    }

    /// Relationships whose type label or any role equals `label`, ignoring case
    pub fn relationships_by_type(&self, label: impl AsRef<str>) -> Vec<RelationshipRef<'a>> {
        let label = label.as_ref();
        self.relationships()
            .filter(|r| {
                r.relationship_type.eq_ignore_ascii_case(label)
                    || r.roles.iter().any(|role| role.eq_ignore_ascii_case(label))
            })
            .collect()
    }

    /// The first relationship between `a` and `b`, in either direction
    pub fn relationship(&self, a: &str, b: &str) -> Option<RelationshipRef<'a>> {
        self.relationships().find(|r| {
            let (left, right) = (r.left().get().name.as_str(), r.right().get().name.as_str());
            (left == a && right == b) || (left == b && right == a)
        })
    }
}

impl<'a> RelationshipRef<'a> {
    pub fn left(&self) -> ContextRef<'a> {
        ContextRef::new(self.model, &self.model[self.relationship.left])
    }

    pub fn right(&self) -> ContextRef<'a> {
        ContextRef::new(self.model, &self.model[self.relationship.right])
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.relationship.roles.contains(role)
    }
}
