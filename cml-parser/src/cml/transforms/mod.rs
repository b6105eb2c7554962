//! Composable processing pipelines
//!
//! Every step from source text to model is a stage implementing [`Runnable`]. A [`Transform`]
//! wraps a chain of stages and checks at compile time that each stage accepts what the
//! previous one produces:
//!
//! ```rust,ignore
//! let pipeline = Transform::from_fn(Ok)
//!     .then(Parsing::new())                        // String → ParsedSource
//!     .then(Building::new(BuildOptions::strict())); // ParsedSource → BuildOutput
//! let output = pipeline.run(source)?;
//! ```
//!
//! The pipelines used by the loader, the CLI and the tests are prebuilt as statics in
//! [`standard`]. Stages live in [`stages`].

pub mod stages;
pub mod standard;

use thiserror::Error;

use crate::cml::diagnostics::Diagnostic;

/// Error raised by a stage
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// The input was rejected with a located diagnostic
    #[error("{0}")]
    Diagnostic(Box<Diagnostic>),
}

impl From<Diagnostic> for TransformError {
    fn from(diagnostic: Diagnostic) -> Self {
        TransformError::Diagnostic(Box::new(diagnostic))
    }
}

/// A single processing step
pub trait Runnable<I, O> {
    fn run(&self, input: I) -> Result<O, TransformError>;
}

/// A chain of stages from `I` to `O`
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, TransformError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, TransformError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Append a stage, feeding it this transform's output
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    pub fn run(&self, input: I) -> Result<O, TransformError> {
        (self.run_fn)(input)
    }
}

impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, TransformError> {
        Transform::run(self, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cml::diagnostics::codes;
    use once_cell::sync::Lazy;

    struct CountLines;
    impl Runnable<String, usize> for CountLines {
        fn run(&self, input: String) -> Result<usize, TransformError> {
            Ok(input.lines().count())
        }
    }

    struct RejectEmpty;
    impl Runnable<usize, usize> for RejectEmpty {
        fn run(&self, input: usize) -> Result<usize, TransformError> {
            if input == 0 {
                Err(Diagnostic::error("empty input").with_code(codes::SYNTAX).into())
            } else {
                Ok(input)
            }
        }
    }

    static LINES: Lazy<Transform<String, usize>> =
        Lazy::new(|| Transform::from_fn(Ok).then(CountLines));

    #[test]
    fn test_stages_compose() {
        let transform = Transform::from_fn(|s: String| Ok(s.trim().to_string()))
            .then(CountLines)
            .then(RejectEmpty);

        assert_eq!(transform.run("a\nb\n".to_string()).unwrap(), 2);
    }

    #[test]
    fn test_failure_stops_the_chain() {
        let transform = Transform::from_fn(Ok).then(CountLines).then(RejectEmpty);

        match transform.run(String::new()) {
            Err(TransformError::Diagnostic(d)) => assert_eq!(d.message, "empty input"),
            other => panic!("expected diagnostic, got {:?}", other),
        }
    }

    #[test]
    fn test_static_pipeline_is_reusable() {
        assert_eq!(LINES.run("x\ny\nz".to_string()).unwrap(), 3);
        assert_eq!(LINES.run(String::new()).unwrap(), 0);
    }
}
