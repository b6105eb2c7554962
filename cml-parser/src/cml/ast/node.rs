//! Uniform borrowed view over tree nodes
//!
//! [`NodeRef`] wraps a reference to any node kind and exposes its children through
//! [`NodeRef::children`]. Each kind lists its child containers in a fixed order, which is the
//! order a depth-first search visits them in.

use super::elements::{
    BlockDecl, Body, BodyEntry, BoundedContextDecl, ContextMapDecl, DomainDecl, DomainObject,
    Element, EntityDecl, GenericBlock, SubdomainDecl, SyntaxTree, UseCaseDecl, UseCaseElement,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Tree,
    Domain,
    Subdomain,
    BoundedContext,
    ContextMap,
    UseCase,
    Aggregate,
    Service,
    Module,
    DomainObject,
    Entity,
    Block,
}

#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Tree(&'a SyntaxTree),
    Domain(&'a DomainDecl),
    Subdomain(&'a SubdomainDecl),
    BoundedContext(&'a BoundedContextDecl),
    ContextMap(&'a ContextMapDecl),
    UseCase(&'a UseCaseDecl),
    Aggregate(&'a BlockDecl),
    Service(&'a BlockDecl),
    Module(&'a BlockDecl),
    DomainObject(&'a DomainObject),
    Entity(&'a EntityDecl),
    Block(&'a GenericBlock),
}

impl<'a> NodeRef<'a> {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeRef::Tree(_) => NodeKind::Tree,
            NodeRef::Domain(_) => NodeKind::Domain,
            NodeRef::Subdomain(_) => NodeKind::Subdomain,
            NodeRef::BoundedContext(_) => NodeKind::BoundedContext,
            NodeRef::ContextMap(_) => NodeKind::ContextMap,
            NodeRef::UseCase(_) => NodeKind::UseCase,
            NodeRef::Aggregate(_) => NodeKind::Aggregate,
            NodeRef::Service(_) => NodeKind::Service,
            NodeRef::Module(_) => NodeKind::Module,
            NodeRef::DomainObject(_) => NodeKind::DomainObject,
            NodeRef::Entity(_) => NodeKind::Entity,
            NodeRef::Block(_) => NodeKind::Block,
        }
    }

    /// Address of the referenced node; together with the kind it identifies the node
    pub fn address(&self) -> usize {
        match self {
            NodeRef::Tree(n) => *n as *const SyntaxTree as usize,
            NodeRef::Domain(n) => *n as *const DomainDecl as usize,
            NodeRef::Subdomain(n) => *n as *const SubdomainDecl as usize,
            NodeRef::BoundedContext(n) => *n as *const BoundedContextDecl as usize,
            NodeRef::ContextMap(n) => *n as *const ContextMapDecl as usize,
            NodeRef::UseCase(n) => *n as *const UseCaseDecl as usize,
            NodeRef::Aggregate(n) | NodeRef::Service(n) | NodeRef::Module(n) => {
                *n as *const BlockDecl as usize
            }
            NodeRef::DomainObject(n) => *n as *const DomainObject as usize,
            NodeRef::Entity(n) => *n as *const EntityDecl as usize,
            NodeRef::Block(n) => *n as *const GenericBlock as usize,
        }
    }

    /// Declared name, for node kinds that have one
    pub fn name(&self) -> Option<&'a str> {
        match self {
            NodeRef::Tree(_) | NodeRef::Block(_) => None,
            NodeRef::Domain(n) => Some(&n.name),
            NodeRef::Subdomain(n) => Some(&n.name),
            NodeRef::BoundedContext(n) => Some(&n.name),
            NodeRef::ContextMap(n) => n.name.as_deref(),
            NodeRef::UseCase(n) => Some(&n.name),
            NodeRef::Aggregate(n) | NodeRef::Service(n) | NodeRef::Module(n) => Some(&n.name),
            NodeRef::DomainObject(n) => Some(&n.name),
            NodeRef::Entity(n) => Some(&n.name),
        }
    }

    /// Direct children in container order
    pub fn children(&self) -> Vec<NodeRef<'a>> {
        match *self {
            NodeRef::Tree(tree) => tree.elements.iter().map(NodeRef::from).collect(),
            NodeRef::Domain(domain) => body_children(&domain.body),
            NodeRef::Subdomain(subdomain) => {
                let mut children = body_children(&subdomain.body);
                children.extend(subdomain.entities.iter().map(NodeRef::Entity));
                children
            }
            NodeRef::BoundedContext(context) => body_children(&context.body),
            NodeRef::UseCase(use_case) => use_case
                .elements
                .iter()
                .filter_map(|element| match element {
                    UseCaseElement::Other(entry) => entry_node(entry),
                    _ => None,
                })
                .collect(),
            NodeRef::Aggregate(decl) | NodeRef::Service(decl) | NodeRef::Module(decl) => {
                body_children(&decl.body)
            }
            NodeRef::DomainObject(object) => body_children(&object.body),
            NodeRef::Block(block) => block.body.as_ref().map(body_children).unwrap_or_default(),
            NodeRef::ContextMap(_) | NodeRef::Entity(_) => Vec::new(),
        }
    }
}

impl<'a> From<&'a Element> for NodeRef<'a> {
    fn from(element: &'a Element) -> Self {
        match element {
            Element::Domain(d) => NodeRef::Domain(d),
            Element::BoundedContext(c) => NodeRef::BoundedContext(c),
            Element::ContextMap(m) => NodeRef::ContextMap(m),
            Element::UseCase(u) => NodeRef::UseCase(u),
            Element::Other(b) => NodeRef::Block(b),
        }
    }
}

fn entry_node(entry: &BodyEntry) -> Option<NodeRef<'_>> {
    match entry {
        BodyEntry::SubdomainAttribute(_)
        | BodyEntry::ContextAttribute(_)
        | BodyEntry::Attribute(_) => None,
        BodyEntry::Subdomain(s) => Some(NodeRef::Subdomain(s)),
        BodyEntry::DomainObject(o) => Some(NodeRef::DomainObject(o)),
        BodyEntry::Entity(e) => Some(NodeRef::Entity(e)),
        BodyEntry::Aggregate(a) => Some(NodeRef::Aggregate(a)),
        BodyEntry::Service(s) => Some(NodeRef::Service(s)),
        BodyEntry::Module(m) => Some(NodeRef::Module(m)),
        BodyEntry::Block(b) => Some(NodeRef::Block(b)),
    }
}

fn body_children(body: &Body) -> Vec<NodeRef<'_>> {
    body.entries.iter().filter_map(entry_node).collect()
}
