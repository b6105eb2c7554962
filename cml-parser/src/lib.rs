//! # cml-parser
//!
//! A parser and semantic model builder for the Context Mapper DSL (CML).
//!
//! File Layout
//!
//! The crate follows the usual front-end split: source text is tokenized, the tokens are parsed
//! into a typed syntax tree, and the tree is then built into the linked semantic model in two
//! passes (build, then link). Each stage lives in its own module under `src/cml`:
//!
//! src/cml
//!   ├── token, lexing     Tokens and tokenization
//!   ├── ast, parsing      Typed syntax tree and the grammar producing it
//!   ├── building          Walker, registry pass, linker pass, relationship classifier
//!   ├── model             The arena-backed semantic model and its views
//!   └── transforms        Composable pipelines shared by the loader, CLI and tests
//!
//! For testing guidelines, see the [testing module](cml::testing).

pub mod cml;

pub use cml::error::CmlError;
pub use cml::loader::{parse_file, parse_file_safe, parse_str, parse_text, CmlLoader};
pub use cml::result::ParseResult;
