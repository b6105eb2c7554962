//! Loading CML source and running pipelines on it
//!
//! [`CmlLoader`] holds source text, an optional filename and the build options. It is the
//! single entry point used by the free functions below, the CLI and the tests.
//!
//! Two modes:
//!
//! - strict ([`CmlLoader::parse`], [`parse_file`], [`parse_str`]): the first error aborts with
//!   a [`CmlError`]
//! - permissive ([`CmlLoader::parse_safe`], [`parse_file_safe`]): every diagnostic is collected
//!   into a [`ParseResult`], which holds a model only when there were no errors
//!
//! ```rust,ignore
//! use cml_parser::cml::loader::CmlLoader;
//!
//! let model = CmlLoader::from_path("insurance.cml")?.parse()?;
//! let result = CmlLoader::from_string("ContextMap { invalid").parse_safe();
//! assert!(!result.ok());
//! ```

use std::fs;
use std::path::Path;

use crate::cml::ast::SyntaxTree;
use crate::cml::building::{BuildOptions, BuildOutput};
use crate::cml::diagnostics::Diagnostic;
use crate::cml::error::CmlError;
use crate::cml::model::Cml;
use crate::cml::result::ParseResult;
use crate::cml::token::TokenStream;
use crate::cml::transforms::standard::{model_pipeline, TOKENIZATION, TO_TREE};
use crate::cml::transforms::Transform;

#[derive(Debug, Clone)]
pub struct CmlLoader {
    source: String,
    filename: Option<String>,
    options: BuildOptions,
}

impl CmlLoader {
    /// Read a file; its path becomes the filename of every diagnostic
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CmlError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| CmlError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = source.len(), "loaded source");
        Ok(CmlLoader {
            source,
            filename: Some(path.display().to_string()),
            options: BuildOptions::default(),
        })
    }

    pub fn from_string<S: Into<String>>(source: S) -> Self {
        CmlLoader {
            source: source.into(),
            filename: None,
            options: BuildOptions::default(),
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Run any pipeline on the source
    pub fn with<O: 'static>(&self, transform: &Transform<String, O>) -> Result<O, CmlError> {
        transform
            .run(self.source.clone())
            .map_err(|err| self.attach_filename(CmlError::from(err)))
    }

    pub fn tokenize(&self) -> Result<TokenStream, CmlError> {
        self.with(&TOKENIZATION)
    }

    pub fn tree(&self) -> Result<SyntaxTree, CmlError> {
        self.with(&TO_TREE)
    }

    /// Build the model and all its diagnostics; fails only on syntax errors
    pub fn build(&self) -> Result<BuildOutput, CmlError> {
        let mut output = self.with(&model_pipeline(self.options))?;
        if let Some(filename) = &self.filename {
            for diagnostic in &mut output.diagnostics {
                diagnostic.filename = Some(filename.clone());
            }
        }
        Ok(output)
    }

    /// Strict parse: syntax errors and escalated findings abort
    pub fn parse(&self) -> Result<Cml, CmlError> {
        let output = self.build()?;
        if let Some(error) = output.errors().next() {
            return Err(CmlError::Resolution(Box::new(error.clone())));
        }
        Ok(output.model)
    }

    /// Permissive parse: never fails, diagnostics are collected into the result
    pub fn parse_safe(&self) -> ParseResult {
        let source = Some(self.source.clone());
        match self.build() {
            Ok(output) => {
                ParseResult::new(output.model, output.diagnostics, source, self.filename.clone())
            }
            Err(err) => ParseResult::failed(err.to_diagnostic(), source, self.filename.clone()),
        }
    }

    fn attach_filename(&self, err: CmlError) -> CmlError {
        let Some(filename) = &self.filename else {
            return err;
        };
        match err {
            CmlError::Syntax(d) => {
                CmlError::Syntax(Box::new((*d).with_filename(filename.clone())))
            }
            CmlError::Resolution(d) => {
                CmlError::Resolution(Box::new((*d).with_filename(filename.clone())))
            }
            io => io,
        }
    }
}

/// Strictly parse a file
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Cml, CmlError> {
    CmlLoader::from_path(path)?.parse()
}

/// Permissively parse a file; an unreadable file is reported as an `io` diagnostic
pub fn parse_file_safe<P: AsRef<Path>>(path: P) -> ParseResult {
    let path = path.as_ref();
    match CmlLoader::from_path(path) {
        Ok(loader) => loader.parse_safe(),
        Err(err) => ParseResult::failed(
            err.to_diagnostic(),
            None,
            Some(path.display().to_string()),
        ),
    }
}

/// Strictly parse source text
pub fn parse_str(source: &str) -> Result<Cml, CmlError> {
    CmlLoader::from_string(source).parse()
}

/// Parse source text under an optional filename
///
/// In strict mode the first error is returned as `Err`; otherwise it is recorded in the result.
pub fn parse_text(
    source: &str,
    filename: Option<&str>,
    strict: bool,
) -> Result<ParseResult, CmlError> {
    let mut loader = CmlLoader::from_string(source);
    if let Some(filename) = filename {
        loader = loader.with_filename(filename);
    }

    let result = loader.parse_safe();
    if strict {
        if let Some(error) = result.errors.first() {
            return Err(strict_error(error));
        }
    }
    Ok(result)
}

fn strict_error(error: &Diagnostic) -> CmlError {
    use crate::cml::diagnostics::codes;

    match error.code.as_deref() {
        Some(codes::SYNTAX) | None => CmlError::Syntax(Box::new(error.clone())),
        Some(_) => CmlError::Resolution(Box::new(error.clone())),
    }
}
