//! Entities of the semantic model
//!
//! Entities never point at each other directly. Cross references are typed ids into the arenas
//! of [`Cml`](super::Cml); navigation goes through the views in [`views`](super::views).

use indexmap::IndexSet;
use serde::Serialize;
use std::fmt;

use super::ids::{ContextId, ContextMapId, DomainId, SubdomainId, UseCaseId};

pub const DEFAULT_CONTEXT_TYPE: &str = "FEATURE";
pub const DEFAULT_CONTEXT_STATE: &str = "UNDEFINED";
pub const DEFAULT_MAP_TYPE: &str = "SYSTEM_LANDSCAPE";
pub const DEFAULT_MAP_STATE: &str = "AS_IS";
pub const UNKNOWN_RELATIONSHIP: &str = "Unknown";

/// Strategic classification of a subdomain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum SubdomainType {
    #[serde(rename = "CORE_DOMAIN")]
    Core,
    #[serde(rename = "SUPPORTING_DOMAIN")]
    Supporting,
    #[default]
    #[serde(rename = "GENERIC_SUBDOMAIN")]
    Generic,
}

impl SubdomainType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubdomainType::Core => "CORE_DOMAIN",
            SubdomainType::Supporting => "SUPPORTING_DOMAIN",
            SubdomainType::Generic => "GENERIC_SUBDOMAIN",
        }
    }

    /// Parse a CML classification literal; anything else is `None`
    pub fn from_literal(literal: &str) -> Option<Self> {
        match literal {
            "CORE_DOMAIN" => Some(SubdomainType::Core),
            "SUPPORTING_DOMAIN" => Some(SubdomainType::Supporting),
            "GENERIC_SUBDOMAIN" => Some(SubdomainType::Generic),
            _ => None,
        }
    }
}

impl fmt::Display for SubdomainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Aggregate {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Domain {
    pub id: DomainId,
    pub name: String,
    pub vision: Option<String>,
    pub subdomains: Vec<SubdomainId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subdomain {
    pub id: SubdomainId,
    pub name: String,
    #[serde(rename = "type")]
    pub subdomain_type: SubdomainType,
    pub vision: Option<String>,
    pub entities: Vec<Entity>,
    pub domain: DomainId,
    /// Contexts implementing this subdomain, mirrored by [`Context::implements`]
    pub implementations: Vec<ContextId>,
}

/// A bounded context
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Context {
    pub id: ContextId,
    pub name: String,
    #[serde(rename = "type")]
    pub context_type: String,
    pub state: String,
    pub vision: Option<String>,
    pub responsibilities: Vec<String>,
    pub implementation_technology: Option<String>,
    pub knowledge_level: Option<String>,
    /// Implemented subdomains, mirrored by [`Subdomain::implementations`]
    pub implements: Vec<SubdomainId>,
    pub aggregates: Vec<Aggregate>,
    pub services: Vec<Service>,
    pub context_map: Option<ContextMapId>,
}

impl Context {
    pub fn new(id: ContextId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            context_type: DEFAULT_CONTEXT_TYPE.to_string(),
            state: DEFAULT_CONTEXT_STATE.to_string(),
            vision: None,
            responsibilities: Vec::new(),
            implementation_technology: None,
            knowledge_level: None,
            implements: Vec::new(),
            aggregates: Vec::new(),
            services: Vec::new(),
            context_map: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Relationship {
    pub left: ContextId,
    pub right: ContextId,
    #[serde(rename = "type")]
    pub relationship_type: String,
    pub roles: IndexSet<String>,
    pub name: Option<String>,
    pub implementation_technology: Option<String>,
}

impl Relationship {
    /// Whether the relationship connects `a` and `b`, in either direction
    pub fn connects(&self, a: ContextId, b: ContextId) -> bool {
        (self.left == a && self.right == b) || (self.left == b && self.right == a)
    }

    pub fn involves(&self, context: ContextId) -> bool {
        self.left == context || self.right == context
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextMap {
    pub id: ContextMapId,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub map_type: String,
    pub state: String,
    /// Members in first-insertion order
    pub contexts: IndexSet<ContextId>,
    pub relationships: Vec<Relationship>,
}

impl ContextMap {
    pub fn new(id: ContextMapId, name: Option<String>) -> Self {
        Self {
            id,
            name,
            map_type: DEFAULT_MAP_TYPE.to_string(),
            state: DEFAULT_MAP_STATE.to_string(),
            contexts: IndexSet::new(),
            relationships: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UseCase {
    pub id: UseCaseId,
    pub name: String,
    pub actor: Option<String>,
    pub secondary_actors: Vec<String>,
    pub benefit: Option<String>,
    pub scope: Option<String>,
    pub level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subdomain_type_literals() {
        assert_eq!(
            SubdomainType::from_literal("CORE_DOMAIN"),
            Some(SubdomainType::Core)
        );
        assert_eq!(SubdomainType::from_literal("CORE"), None);
        assert_eq!(SubdomainType::default(), SubdomainType::Generic);
        assert_eq!(
            serde_json::to_string(&SubdomainType::Supporting).unwrap(),
            "\"SUPPORTING_DOMAIN\""
        );
    }

    #[test]
    fn test_defaults() {
        let context = Context::new(ContextId(0), "Claims");
        assert_eq!(context.context_type, "FEATURE");
        assert_eq!(context.state, "UNDEFINED");

        let map = ContextMap::new(ContextMapId(0), None);
        assert_eq!(map.map_type, "SYSTEM_LANDSCAPE");
        assert_eq!(map.state, "AS_IS");
    }

    #[test]
    fn test_relationship_endpoints() {
        let rel = Relationship {
            left: ContextId(0),
            right: ContextId(1),
            relationship_type: UNKNOWN_RELATIONSHIP.to_string(),
            roles: IndexSet::new(),
            name: None,
            implementation_technology: None,
        };
        assert!(rel.connects(ContextId(1), ContextId(0)));
        assert!(!rel.connects(ContextId(0), ContextId(2)));
        assert!(rel.involves(ContextId(1)));
    }
}
