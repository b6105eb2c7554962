//! Build options

use serde::{Deserialize, Serialize};

use crate::cml::diagnostics::Severity;

/// What to do with a name that resolves to nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferencePolicy {
    /// Drop the link and report a warning
    #[default]
    Warn,
    /// Drop the link and report an error
    Error,
}

/// What to do when two declarations of the same kind share a name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Keep both; lookups by name see the later one. Reported as a warning.
    #[default]
    Shadow,
    /// Keep both, shadowing as above, but report an error
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    pub references: ReferencePolicy,
    pub duplicates: DuplicatePolicy,
}

impl BuildOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_references(mut self, references: ReferencePolicy) -> Self {
        self.references = references;
        self
    }

    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// Unresolved references and duplicate names both become errors
    pub fn strict() -> Self {
        Self {
            references: ReferencePolicy::Error,
            duplicates: DuplicatePolicy::Reject,
        }
    }

    pub(crate) fn reference_severity(&self) -> Severity {
        match self.references {
            ReferencePolicy::Warn => Severity::Warning,
            ReferencePolicy::Error => Severity::Error,
        }
    }

    pub(crate) fn duplicate_severity(&self) -> Severity {
        match self.duplicates {
            DuplicatePolicy::Shadow => Severity::Warning,
            DuplicatePolicy::Reject => Severity::Error,
        }
    }
}
