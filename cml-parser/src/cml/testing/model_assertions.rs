//! Fluent assertions over a built model
//!
//! Every assertion carries a context string naming the path taken to reach it, such as
//! `model:context_map[InsuranceMap]:relationship[A,B]`, and includes it in failure messages.

use crate::cml::model::{
    Cml, ContextMapRef, ContextRef, DomainRef, RelationshipRef, SubdomainRef, SubdomainType,
    UseCase,
};

/// Create an assertion builder for a model
pub fn assert_model(model: &Cml) -> ModelAssertion<'_> {
    ModelAssertion { model }
}

fn assert_names(context: &str, what: &str, actual: Vec<&str>, expected: &[&str]) {
    assert_eq!(
        actual, expected,
        "{}: Expected {} {:?}, but got {:?}",
        context, what, expected, actual
    );
}

pub struct ModelAssertion<'a> {
    model: &'a Cml,
}

impl<'a> ModelAssertion<'a> {
    pub fn domain_count(self, expected: usize) -> Self {
        let actual = self.model.domains.len();
        assert_eq!(actual, expected, "model: Expected {} domains, found {}", expected, actual);
        self
    }

    pub fn subdomain_count(self, expected: usize) -> Self {
        let actual = self.model.subdomains.len();
        assert_eq!(
            actual, expected,
            "model: Expected {} subdomains, found {}",
            expected, actual
        );
        self
    }

    pub fn context_count(self, expected: usize) -> Self {
        let actual = self.model.contexts.len();
        assert_eq!(
            actual, expected,
            "model: Expected {} bounded contexts, found {}",
            expected, actual
        );
        self
    }

    pub fn context_map_count(self, expected: usize) -> Self {
        let actual = self.model.context_maps.len();
        assert_eq!(
            actual, expected,
            "model: Expected {} context maps, found {}",
            expected, actual
        );
        self
    }

    pub fn use_case_count(self, expected: usize) -> Self {
        let actual = self.model.use_cases.len();
        assert_eq!(
            actual, expected,
            "model: Expected {} use cases, found {}",
            expected, actual
        );
        self
    }

    pub fn domain<F>(self, name: &str, assertion: F) -> Self
    where
        F: FnOnce(DomainAssertion<'a>),
    {
        let domain = self
            .model
            .domain(name)
            .unwrap_or_else(|| panic!("model: No domain named '{}'", name));
        assertion(DomainAssertion {
            domain,
            context: format!("model:domain[{}]", name),
        });
        self
    }

    pub fn subdomain<F>(self, name: &str, assertion: F) -> Self
    where
        F: FnOnce(SubdomainAssertion<'a>),
    {
        let subdomain = self
            .model
            .subdomain(name)
            .unwrap_or_else(|| panic!("model: No subdomain named '{}'", name));
        assertion(SubdomainAssertion {
            subdomain,
            context: format!("model:subdomain[{}]", name),
        });
        self
    }

    pub fn context<F>(self, name: &str, assertion: F) -> Self
    where
        F: FnOnce(ContextAssertion<'a>),
    {
        let bounded = self
            .model
            .context(name)
            .unwrap_or_else(|| panic!("model: No bounded context named '{}'", name));
        assertion(ContextAssertion {
            bounded,
            context: format!("model:context[{}]", name),
        });
        self
    }

    pub fn no_context(self, name: &str) -> Self {
        assert!(
            self.model.context(name).is_none(),
            "model: Expected no bounded context named '{}'",
            name
        );
        self
    }

    pub fn context_map<F>(self, name: &str, assertion: F) -> Self
    where
        F: FnOnce(ContextMapAssertion<'a>),
    {
        let map = self
            .model
            .context_map(name)
            .unwrap_or_else(|| panic!("model: No context map named '{}'", name));
        assertion(ContextMapAssertion {
            map,
            context: format!("model:context_map[{}]", name),
        });
        self
    }

    /// Context map by position, for anonymous maps
    pub fn context_map_at<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ContextMapAssertion<'a>),
    {
        let map = self.model.context_maps().nth(index).unwrap_or_else(|| {
            panic!(
                "model: Context map index {} out of bounds ({} maps)",
                index,
                self.model.context_maps.len()
            )
        });
        assertion(ContextMapAssertion {
            map,
            context: format!("model:context_maps[{}]", index),
        });
        self
    }

    pub fn use_case<F>(self, name: &str, assertion: F) -> Self
    where
        F: FnOnce(UseCaseAssertion<'a>),
    {
        let use_case = self
            .model
            .use_case(name)
            .unwrap_or_else(|| panic!("model: No use case named '{}'", name));
        assertion(UseCaseAssertion {
            use_case,
            context: format!("model:use_case[{}]", name),
        });
        self
    }
}

pub struct DomainAssertion<'a> {
    domain: DomainRef<'a>,
    context: String,
}

impl<'a> DomainAssertion<'a> {
    pub fn vision(self, expected: Option<&str>) -> Self {
        let actual = self.domain.vision.as_deref();
        assert_eq!(
            actual, expected,
            "{}: Expected vision {:?}, but got {:?}",
            self.context, expected, actual
        );
        self
    }

    pub fn subdomains(self, expected: &[&str]) -> Self {
        let actual = self
            .domain
            .subdomains()
            .map(|s| s.get().name.as_str())
            .collect();
        assert_names(&self.context, "subdomains", actual, expected);
        self
    }

    pub fn subdomain<F>(self, name: &str, assertion: F) -> Self
    where
        F: FnOnce(SubdomainAssertion<'a>),
    {
        let subdomain = self.domain.subdomain(name).unwrap_or_else(|| {
            panic!("{}: No subdomain named '{}'", self.context, name)
        });
        assertion(SubdomainAssertion {
            subdomain,
            context: format!("{}:subdomain[{}]", self.context, name),
        });
        self
    }
}

pub struct SubdomainAssertion<'a> {
    subdomain: SubdomainRef<'a>,
    context: String,
}

impl<'a> SubdomainAssertion<'a> {
    pub fn subdomain_type(self, expected: SubdomainType) -> Self {
        let actual = self.subdomain.subdomain_type;
        assert_eq!(
            actual, expected,
            "{}: Expected type {}, but got {}",
            self.context, expected, actual
        );
        self
    }

    pub fn vision(self, expected: Option<&str>) -> Self {
        let actual = self.subdomain.vision.as_deref();
        assert_eq!(
            actual, expected,
            "{}: Expected vision {:?}, but got {:?}",
            self.context, expected, actual
        );
        self
    }

    pub fn entities(self, expected: &[&str]) -> Self {
        let actual = self
            .subdomain
            .get()
            .entities
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_names(&self.context, "entities", actual, expected);
        self
    }

    pub fn domain(self, expected: &str) -> Self {
        let actual = self.subdomain.domain().get().name.as_str();
        assert_eq!(
            actual, expected,
            "{}: Expected parent domain '{}', but got '{}'",
            self.context, expected, actual
        );
        self
    }

    pub fn implementations(self, expected: &[&str]) -> Self {
        let actual = self
            .subdomain
            .implementations()
            .map(|c| c.get().name.as_str())
            .collect();
        assert_names(&self.context, "implementations", actual, expected);
        self
    }
}

pub struct ContextAssertion<'a> {
    bounded: ContextRef<'a>,
    context: String,
}

impl<'a> ContextAssertion<'a> {
    pub fn context_type(self, expected: &str) -> Self {
        let actual = self.bounded.context_type.as_str();
        assert_eq!(
            actual, expected,
            "{}: Expected type '{}', but got '{}'",
            self.context, expected, actual
        );
        self
    }

    pub fn state(self, expected: &str) -> Self {
        let actual = self.bounded.state.as_str();
        assert_eq!(
            actual, expected,
            "{}: Expected state '{}', but got '{}'",
            self.context, expected, actual
        );
        self
    }

    pub fn vision(self, expected: Option<&str>) -> Self {
        let actual = self.bounded.vision.as_deref();
        assert_eq!(
            actual, expected,
            "{}: Expected vision {:?}, but got {:?}",
            self.context, expected, actual
        );
        self
    }

    pub fn responsibilities(self, expected: &[&str]) -> Self {
        let actual = self
            .bounded
            .get()
            .responsibilities
            .iter()
            .map(String::as_str)
            .collect();
        assert_names(&self.context, "responsibilities", actual, expected);
        self
    }

    pub fn implementation_technology(self, expected: Option<&str>) -> Self {
        let actual = self.bounded.implementation_technology.as_deref();
        assert_eq!(
            actual, expected,
            "{}: Expected implementation technology {:?}, but got {:?}",
            self.context, expected, actual
        );
        self
    }

    pub fn knowledge_level(self, expected: Option<&str>) -> Self {
        let actual = self.bounded.knowledge_level.as_deref();
        assert_eq!(
            actual, expected,
            "{}: Expected knowledge level {:?}, but got {:?}",
            self.context, expected, actual
        );
        self
    }

    pub fn implements(self, expected: &[&str]) -> Self {
        let actual = self
            .bounded
            .implements()
            .map(|s| s.get().name.as_str())
            .collect();
        assert_names(&self.context, "implemented subdomains", actual, expected);
        self
    }

    pub fn aggregates(self, expected: &[&str]) -> Self {
        let actual = self
            .bounded
            .get()
            .aggregates
            .iter()
            .map(|a| a.name.as_str())
            .collect();
        assert_names(&self.context, "aggregates", actual, expected);
        self
    }

    pub fn services(self, expected: &[&str]) -> Self {
        let actual = self
            .bounded
            .get()
            .services
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_names(&self.context, "services", actual, expected);
        self
    }

    /// Name of the map the context was last added to; `None` for no map or an anonymous one
    pub fn context_map(self, expected: Option<&str>) -> Self {
        let actual = self
            .bounded
            .context_map()
            .and_then(|m| m.get().name.as_deref());
        assert_eq!(
            actual, expected,
            "{}: Expected context map {:?}, but got {:?}",
            self.context, expected, actual
        );
        self
    }
}

pub struct ContextMapAssertion<'a> {
    map: ContextMapRef<'a>,
    context: String,
}

impl<'a> ContextMapAssertion<'a> {
    pub fn map_type(self, expected: &str) -> Self {
        let actual = self.map.map_type.as_str();
        assert_eq!(
            actual, expected,
            "{}: Expected type '{}', but got '{}'",
            self.context, expected, actual
        );
        self
    }

    pub fn state(self, expected: &str) -> Self {
        let actual = self.map.state.as_str();
        assert_eq!(
            actual, expected,
            "{}: Expected state '{}', but got '{}'",
            self.context, expected, actual
        );
        self
    }

    pub fn contexts(self, expected: &[&str]) -> Self {
        let actual = self.map.contexts().map(|c| c.get().name.as_str()).collect();
        assert_names(&self.context, "member contexts", actual, expected);
        self
    }

    pub fn relationship_count(self, expected: usize) -> Self {
        let actual = self.map.relationships.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} relationships, found {}",
            self.context, expected, actual
        );
        self
    }

    /// The first relationship between two contexts, in either direction
    pub fn relationship<F>(self, a: &str, b: &str, assertion: F) -> Self
    where
        F: FnOnce(RelationshipAssertion<'a>),
    {
        let relationship = self.map.relationship(a, b).unwrap_or_else(|| {
            panic!("{}: No relationship between '{}' and '{}'", self.context, a, b)
        });
        assertion(RelationshipAssertion {
            relationship,
            context: format!("{}:relationship[{},{}]", self.context, a, b),
        });
        self
    }

    pub fn relationship_at<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(RelationshipAssertion<'a>),
    {
        let relationship = self.map.relationships().nth(index).unwrap_or_else(|| {
            panic!(
                "{}: Relationship index {} out of bounds ({} relationships)",
                self.context,
                index,
                self.map.relationships.len()
            )
        });
        assertion(RelationshipAssertion {
            relationship,
            context: format!("{}:relationships[{}]", self.context, index),
        });
        self
    }
}

pub struct RelationshipAssertion<'a> {
    relationship: RelationshipRef<'a>,
    context: String,
}

impl<'a> RelationshipAssertion<'a> {
    pub fn endpoints(self, left: &str, right: &str) -> Self {
        let actual = (
            self.relationship.left().get().name.as_str(),
            self.relationship.right().get().name.as_str(),
        );
        assert_eq!(
            actual,
            (left, right),
            "{}: Expected endpoints ({}, {}), but got {:?}",
            self.context,
            left,
            right,
            actual
        );
        self
    }

    pub fn relationship_type(self, expected: &str) -> Self {
        let actual = self.relationship.relationship_type.as_str();
        assert_eq!(
            actual, expected,
            "{}: Expected type '{}', but got '{}'",
            self.context, expected, actual
        );
        self
    }

    /// Roles in insertion order
    pub fn roles(self, expected: &[&str]) -> Self {
        let actual = self
            .relationship
            .get()
            .roles
            .iter()
            .map(String::as_str)
            .collect();
        assert_names(&self.context, "roles", actual, expected);
        self
    }

    pub fn name(self, expected: Option<&str>) -> Self {
        let actual = self.relationship.name.as_deref();
        assert_eq!(
            actual, expected,
            "{}: Expected name {:?}, but got {:?}",
            self.context, expected, actual
        );
        self
    }

    pub fn implementation_technology(self, expected: Option<&str>) -> Self {
        let actual = self.relationship.implementation_technology.as_deref();
        assert_eq!(
            actual, expected,
            "{}: Expected implementation technology {:?}, but got {:?}",
            self.context, expected, actual
        );
        self
    }
}

pub struct UseCaseAssertion<'a> {
    use_case: &'a UseCase,
    context: String,
}

impl UseCaseAssertion<'_> {
    pub fn actor(self, expected: Option<&str>) -> Self {
        let actual = self.use_case.actor.as_deref();
        assert_eq!(
            actual, expected,
            "{}: Expected actor {:?}, but got {:?}",
            self.context, expected, actual
        );
        self
    }

    pub fn secondary_actors(self, expected: &[&str]) -> Self {
        let actual = self
            .use_case
            .secondary_actors
            .iter()
            .map(String::as_str)
            .collect();
        assert_names(&self.context, "secondary actors", actual, expected);
        self
    }

    pub fn benefit(self, expected: Option<&str>) -> Self {
        let actual = self.use_case.benefit.as_deref();
        assert_eq!(
            actual, expected,
            "{}: Expected benefit {:?}, but got {:?}",
            self.context, expected, actual
        );
        self
    }

    pub fn scope(self, expected: Option<&str>) -> Self {
        let actual = self.use_case.scope.as_deref();
        assert_eq!(
            actual, expected,
            "{}: Expected scope {:?}, but got {:?}",
            self.context, expected, actual
        );
        self
    }

    pub fn level(self, expected: Option<&str>) -> Self {
        let actual = self.use_case.level.as_deref();
        assert_eq!(
            actual, expected,
            "{}: Expected level {:?}, but got {:?}",
            self.context, expected, actual
        );
        self
    }
}
