//! Building the semantic model from a syntax tree
//!
//! The build runs in two strictly ordered passes over the top-level elements:
//!
//! 1. [Registry](registry): create every domain, subdomain, bounded context, context map and use
//!    case, apply attribute overrides, and index each by name.
//! 2. [Linker](linker): resolve `implements`, `contains` and relationship endpoints against the
//!    names registered in pass 1, and [classify](classify) each relationship.
//!
//! Because pass 2 only reads what pass 1 registered, declarations may reference each other in
//! any order within a file.
//!
//! Neither pass fails. Findings (unresolved references, duplicate names, unknown subdomain
//! types) are collected as [`Diagnostic`]s next to the model; [`BuildOptions`] decides which of
//! them count as errors.

pub mod classify;
pub mod linker;
pub mod options;
pub mod overrides;
pub mod registry;
pub mod walker;

pub use options::{BuildOptions, DuplicatePolicy, ReferencePolicy};

use crate::cml::ast::{Span, SyntaxTree};
use crate::cml::diagnostics::{Diagnostic, Severity};
use crate::cml::model::Cml;

/// A built model and everything reported while building it
#[derive(Debug, Clone, Default)]
pub struct BuildOutput {
    pub model: Cml,
    pub diagnostics: Vec<Diagnostic>,
}

impl BuildOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| !d.is_error())
    }
}

/// Collects the diagnostics of one build
pub(crate) struct Sink<'s> {
    pub(crate) options: BuildOptions,
    source: Option<&'s str>,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl<'s> Sink<'s> {
    pub(crate) fn new(options: &BuildOptions, source: Option<&'s str>) -> Self {
        Self {
            options: *options,
            source,
            diagnostics: Vec::new(),
        }
    }

    pub(crate) fn report(
        &mut self,
        severity: Severity,
        code: &str,
        message: String,
        span: &Span,
    ) {
        tracing::warn!(%severity, code, "{}", message);
        let mut diagnostic = Diagnostic::new(severity, message).with_code(code);
        if let Some(source) = self.source {
            diagnostic = diagnostic.at_span(source, span);
        }
        self.diagnostics.push(diagnostic);
    }

    pub(crate) fn report_warning(&mut self, code: &str, message: String, span: &Span) {
        self.report(Severity::Warning, code, message, span);
    }
}

/// Builds models with fixed options
///
/// With a source attached, diagnostics carry the line, column and surrounding lines of the
/// declaration they are about. Without one they carry only a message.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelBuilder<'s> {
    options: BuildOptions,
    source: Option<&'s str>,
}

impl<'s> ModelBuilder<'s> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    /// Source text the tree was parsed from, used to locate diagnostics
    pub fn with_source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn build(&self, tree: &SyntaxTree) -> BuildOutput {
        let mut sink = Sink::new(&self.options, self.source);
        let mut registry = registry::register(tree, &mut sink);
        linker::link(tree, &mut registry, &mut sink);

        BuildOutput {
            model: registry.model,
            diagnostics: sink.diagnostics,
        }
    }
}

/// Build a model with default options
pub fn build(tree: &SyntaxTree) -> BuildOutput {
    ModelBuilder::new().build(tree)
}
