//! Testing utilities for the CML parser
//!
//!     CML has a reference implementation, but no corpus of verified source text ships with
//!     this crate. Hand-written snippets drift: a misplaced bracket in a relationship or a
//!     keyword with the wrong case silently turns a test about linking into a test about error
//!     recovery. Tests therefore follow two rules.
//!
//! Rule 1: Use the Sample Files
//!
//!     Model-level tests load the curated files under `cml-parser/samples/` through
//!     [`Sample`]. Each file is small, exercises one area of the language and is known to
//!     parse the way its comments say.
//!
//!     ```rust,ignore
//!     use cml_parser::cml::testing::Sample;
//!
//!     let model = Sample::Insurance.parse();
//!     let result = Sample::UnterminatedMap.parse_safe();
//!     ```
//!
//!     Inline source is fine for unit tests of a single grammar rule or builder step, where
//!     the snippet is the thing under test.
//!
//! Rule 2: Assert the Model Fluently
//!
//!     Matching on arenas by index hides what a test checks. [`assert_model`] walks the model
//!     by name and reports the path it took when an assertion fails:
//!
//!     ```rust,ignore
//!     use cml_parser::cml::testing::assert_model;
//!
//!     assert_model(&model)
//!         .context_count(3)
//!         .context("PolicyContext", |c| {
//!             c.context_type("SYSTEM").implements(&["PolicyManagement", "Printing"]);
//!         })
//!         .context_map("InsuranceMap", |m| {
//!             m.relationship("CustomerContext", "PolicyContext", |r| {
//!                 r.relationship_type("Upstream-Downstream").roles(&["U", "OHS", "PL", "D", "ACL"]);
//!             });
//!         });
//!     ```

mod model_assertions;
mod samples;

pub use model_assertions::{
    assert_model, ContextAssertion, ContextMapAssertion, DomainAssertion, ModelAssertion,
    RelationshipAssertion, SubdomainAssertion, UseCaseAssertion,
};
pub use samples::Sample;

use std::path::{Path, PathBuf};

/// Path of a file under `cml-parser/samples/`
pub fn sample_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("samples")
        .join(name)
}
