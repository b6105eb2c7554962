//! Errors of the strict entry points

use std::path::PathBuf;
use thiserror::Error;

use crate::cml::diagnostics::Diagnostic;
use crate::cml::transforms::TransformError;

#[derive(Debug, Error)]
pub enum CmlError {
    /// The lexer or grammar rejected the input
    #[error("{0}")]
    Syntax(Box<Diagnostic>),
    /// The model was built but a finding was escalated to an error
    #[error("{0}")]
    Resolution(Box<Diagnostic>),
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CmlError {
    /// The diagnostic behind the error, if there is one
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            CmlError::Syntax(d) | CmlError::Resolution(d) => Some(d),
            CmlError::Io { .. } => None,
        }
    }

    /// The error as a diagnostic, I/O failures included
    pub fn to_diagnostic(&self) -> Diagnostic {
        use crate::cml::diagnostics::codes;

        match self {
            CmlError::Syntax(d) | CmlError::Resolution(d) => (**d).clone(),
            CmlError::Io { path, .. } => Diagnostic::error(self.to_string())
                .with_code(codes::IO)
                .with_filename(path.display().to_string()),
        }
    }
}

impl From<TransformError> for CmlError {
    fn from(err: TransformError) -> Self {
        match err {
            TransformError::Diagnostic(d) => CmlError::Syntax(d),
        }
    }
}
