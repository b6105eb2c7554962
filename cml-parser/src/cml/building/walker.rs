//! Recursive search over the typed tree
//!
//! Every node kind exposes its child containers in a fixed order through
//! [`NodeRef::children`]. The walker follows them depth-first and reports matching descendants
//! in pre-order: a node comes before anything nested inside it, and siblings keep source order.
//!
//! The root itself is never reported, only its descendants. A node reachable through more than
//! one container is reported once.

use std::collections::HashSet;

use crate::cml::ast::{NodeKind, NodeRef};

/// All descendants of `root` of the given kind
pub fn find_all<'a>(root: NodeRef<'a>, kind: NodeKind) -> Vec<NodeRef<'a>> {
    find_matching(root, |k| k == kind)
}

/// All descendants of `root` whose kind satisfies `predicate`
pub fn find_matching<'a>(
    root: NodeRef<'a>,
    predicate: impl Fn(NodeKind) -> bool,
) -> Vec<NodeRef<'a>> {
    let mut found = Vec::new();
    let mut visited = HashSet::new();
    visited.insert((root.kind(), root.address()));
    walk(root, &predicate, &mut visited, &mut found);
    found
}

fn walk<'a>(
    node: NodeRef<'a>,
    predicate: &dyn Fn(NodeKind) -> bool,
    visited: &mut HashSet<(NodeKind, usize)>,
    found: &mut Vec<NodeRef<'a>>,
) {
    for child in node.children() {
        if !visited.insert((child.kind(), child.address())) {
            continue;
        }
        if predicate(child.kind()) {
            found.push(child);
        }
        walk(child, predicate, visited, found);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cml::ast::{
        BlockDecl, Body, BodyEntry, BoundedContextDecl, DomainDecl, DomainObject, GenericBlock,
        SubdomainDecl,
    };

    fn names(nodes: &[NodeRef<'_>]) -> Vec<String> {
        nodes
            .iter()
            .filter_map(|n| n.name().map(str::to_string))
            .collect()
    }

    #[test]
    fn test_finds_nested_subdomains_in_pre_order() {
        let domain = DomainDecl::new("Insurance")
            .with_entry(BodyEntry::Subdomain(
                SubdomainDecl::new("Outer").with_entry(BodyEntry::Subdomain(SubdomainDecl::new(
                    "Inner",
                ))),
            ))
            .with_entry(BodyEntry::Block(GenericBlock::new("Group").with_body(
                Body::new(vec![BodyEntry::Subdomain(SubdomainDecl::new("Grouped"))]),
            )))
            .with_entry(BodyEntry::Subdomain(SubdomainDecl::new("Last")));

        let found = find_all(NodeRef::Domain(&domain), NodeKind::Subdomain);
        assert_eq!(names(&found), vec!["Outer", "Inner", "Grouped", "Last"]);
    }

    #[test]
    fn test_finds_aggregates_and_services_at_any_depth() {
        let context = BoundedContextDecl::new("Claims")
            .with_entry(BodyEntry::Module(
                BlockDecl::new("handling").with_entry(BodyEntry::Aggregate(
                    BlockDecl::new("Claim")
                        .with_entry(BodyEntry::DomainObject(DomainObject::entity("Claim")))
                        .with_entry(BodyEntry::Service(BlockDecl::new("ClaimService"))),
                )),
            ))
            .with_entry(BodyEntry::Service(BlockDecl::new("Payouts")))
            .with_entry(BodyEntry::Aggregate(BlockDecl::new("Policy")));

        let root = NodeRef::BoundedContext(&context);
        assert_eq!(
            names(&find_all(root, NodeKind::Aggregate)),
            vec!["Claim", "Policy"]
        );
        assert_eq!(
            names(&find_all(root, NodeKind::Service)),
            vec!["ClaimService", "Payouts"]
        );
        assert_eq!(
            names(&find_matching(root, |k| matches!(
                k,
                NodeKind::Aggregate | NodeKind::Service
            ))),
            vec!["Claim", "ClaimService", "Payouts", "Policy"]
        );
    }

    #[test]
    fn test_root_is_not_reported() {
        let subdomain = SubdomainDecl::new("Alone");
        assert!(find_all(NodeRef::Subdomain(&subdomain), NodeKind::Subdomain).is_empty());
    }
}
