//! Parser implementation for CML using chumsky
//!
//! This module turns the token stream produced by [lexing](crate::cml::lexing) into a typed
//! [`SyntaxTree`]. Tokens are fed to chumsky as a `Stream` whose spans are the byte ranges from
//! the lexer, so every span in the tree and in errors is a byte range into the source.
//!
//! Parsing stops at the first syntax error. The error with the earliest position is converted
//! into a [`Diagnostic`] with a 1-based location, the expected tokens, and a few lines of
//! surrounding source.
//!
//! ## Testing
//!
//! Parser tests use the verified sample files. See the [testing module](crate::cml::testing).

pub mod combinators;
pub mod context_map;
pub mod errors;
pub mod grammar;

use chumsky::prelude::*;
use chumsky::Stream;

use crate::cml::ast::SyntaxTree;
use crate::cml::diagnostics::{codes, Diagnostic};
use crate::cml::lexing::tokenize;
use crate::cml::token::TokenStream;

/// Parse a token stream into a syntax tree
pub fn parse(tokens: TokenStream, source: &str) -> Result<SyntaxTree, Diagnostic> {
    let eoi = source.len()..source.len();
    let result = grammar::file().parse(Stream::from_iter(eoi, tokens.into_iter()));

    match result {
        Ok(tree) => {
            tracing::trace!(elements = tree.elements.len(), "parsed syntax tree");
            Ok(tree)
        }
        Err(errors) => {
            let diagnostic = match errors::first_error(errors) {
                Some(error) => errors::to_diagnostic(&error, source),
                None => Diagnostic::error("Invalid syntax").with_code(codes::SYNTAX),
            };
            tracing::debug!(message = %diagnostic.message, "parsing failed");
            Err(diagnostic)
        }
    }
}

/// Tokenize and parse source text
pub fn parse_source(source: &str) -> Result<SyntaxTree, Diagnostic> {
    let tokens = tokenize(source)?;
    parse(tokens, source)
}
