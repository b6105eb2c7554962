//! The outcome of a permissive parse
//!
//! [`ParseResult`] carries everything a parse produced: the model when there were no errors,
//! the diagnostics split by severity, and the source and filename they refer to. It is built
//! once by the loader and not modified afterwards.

use serde::Serialize;
use std::fmt;
use std::path::Path;

use crate::cml::diagnostics::Diagnostic;
use crate::cml::model::Cml;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    /// The linked model; `None` whenever `errors` is not empty
    pub model: Option<Cml>,
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
    pub source: Option<String>,
    pub filename: Option<String>,
}

/// Compact form of a [`ParseResult`], without model and source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary<'a> {
    pub ok: bool,
    pub errors: &'a [Diagnostic],
    pub warnings: &'a [Diagnostic],
    pub filename: Option<&'a str>,
}

impl ParseResult {
    /// Split `diagnostics` by severity; the model is dropped if any of them is an error
    pub fn new(
        model: Cml,
        diagnostics: Vec<Diagnostic>,
        source: Option<String>,
        filename: Option<String>,
    ) -> Self {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            diagnostics.into_iter().partition(Diagnostic::is_error);
        let model = errors.is_empty().then_some(model);
        Self {
            model,
            errors,
            warnings,
            source,
            filename,
        }
    }

    /// A result for input that never produced a model
    pub fn failed(error: Diagnostic, source: Option<String>, filename: Option<String>) -> Self {
        Self {
            model: None,
            errors: vec![error],
            warnings: Vec::new(),
            source,
            filename,
        }
    }

    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn summary(&self) -> Summary<'_> {
        Summary {
            ok: self.ok(),
            errors: &self.errors,
            warnings: &self.warnings,
            filename: self.filename.as_deref(),
        }
    }

    /// The model, or an empty one when the parse failed
    pub fn model_or_default(&self) -> Cml {
        self.model.clone().unwrap_or_default()
    }
}

impl fmt::Display for ParseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", if self.ok() { "OK" } else { "ERROR" })?;
        if let Some(filename) = &self.filename {
            let name = Path::new(filename)
                .file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_else(|| filename.into());
            write!(f, " file={}", name)?;
        }
        if !self.errors.is_empty() {
            write!(f, " errors={}", self.errors.len())?;
        }
        if !self.warnings.is_empty() {
            write!(f, " warnings={}", self.warnings.len())?;
        }
        Ok(())
    }
}
