//! Building stage: syntax tree to linked model

use crate::cml::building::{BuildOptions, BuildOutput, ModelBuilder};
use crate::cml::transforms::stages::parsing::ParsedSource;
use crate::cml::transforms::{Runnable, TransformError};

/// Runs both build passes. Never fails; findings are returned in the output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Building {
    options: BuildOptions,
}

impl Building {
    pub fn new(options: BuildOptions) -> Self {
        Self { options }
    }
}

impl Runnable<ParsedSource, BuildOutput> for Building {
    fn run(&self, input: ParsedSource) -> Result<BuildOutput, TransformError> {
        Ok(ModelBuilder::new()
            .with_options(self.options)
            .with_source(&input.source)
            .build(&input.tree))
    }
}
