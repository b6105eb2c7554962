//! Known relationship labels and role abbreviations

use serde::Serialize;
use std::fmt;

/// Relationship patterns and roles of the Context Mapper language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RelationshipType {
    #[serde(rename = "Customer-Supplier")]
    CustomerSupplier,
    #[serde(rename = "Upstream-Downstream")]
    UpstreamDownstream,
    #[serde(rename = "Downstream-Upstream")]
    DownstreamUpstream,
    Partnership,
    #[serde(rename = "Shared-Kernel")]
    SharedKernel,
    /// Anticorruption layer
    #[serde(rename = "ACL")]
    Acl,
    /// Conformist
    #[serde(rename = "CF")]
    Cf,
    /// Open host service
    #[serde(rename = "OHS")]
    Ohs,
    /// Published language
    #[serde(rename = "PL")]
    Pl,
    #[serde(rename = "SK")]
    Sk,
    U,
    D,
    S,
    C,
    P,
}

impl RelationshipType {
    pub const ALL: [RelationshipType; 15] = [
        RelationshipType::CustomerSupplier,
        RelationshipType::UpstreamDownstream,
        RelationshipType::DownstreamUpstream,
        RelationshipType::Partnership,
        RelationshipType::SharedKernel,
        RelationshipType::Acl,
        RelationshipType::Cf,
        RelationshipType::Ohs,
        RelationshipType::Pl,
        RelationshipType::Sk,
        RelationshipType::U,
        RelationshipType::D,
        RelationshipType::S,
        RelationshipType::C,
        RelationshipType::P,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipType::CustomerSupplier => "Customer-Supplier",
            RelationshipType::UpstreamDownstream => "Upstream-Downstream",
            RelationshipType::DownstreamUpstream => "Downstream-Upstream",
            RelationshipType::Partnership => "Partnership",
            RelationshipType::SharedKernel => "Shared-Kernel",
            RelationshipType::Acl => "ACL",
            RelationshipType::Cf => "CF",
            RelationshipType::Ohs => "OHS",
            RelationshipType::Pl => "PL",
            RelationshipType::Sk => "SK",
            RelationshipType::U => "U",
            RelationshipType::D => "D",
            RelationshipType::S => "S",
            RelationshipType::C => "C",
            RelationshipType::P => "P",
        }
    }

    /// Look up a label, ignoring case
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(label))
    }
}

impl AsRef<str> for RelationshipType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip_through_lookup() {
        for t in RelationshipType::ALL {
            assert_eq!(RelationshipType::from_label(t.as_str()), Some(t));
        }
        assert_eq!(
            RelationshipType::from_label("shared-kernel"),
            Some(RelationshipType::SharedKernel)
        );
        assert_eq!(RelationshipType::from_label("Unknown"), None);
    }

    #[test]
    fn test_serialized_form_matches_label() {
        assert_eq!(
            serde_json::to_string(&RelationshipType::Ohs).unwrap(),
            "\"OHS\""
        );
        assert_eq!(RelationshipType::CustomerSupplier.to_string(), "Customer-Supplier");
    }
}
