//! Lexer
//!
//!     Tokenization is a single logos pass: whitespace and comments are skipped, every other
//!     piece of source text becomes a [`Token`] paired with its byte range. The ranges are never
//!     modified afterwards; the grammar copies them into node spans and diagnostics turn them
//!     into line/column positions.
//!
//!     The token set is deliberately permissive (any stray punctuation becomes a `Symbol`), so the
//!     only lexical errors are characters that cannot start a token at all, which in practice
//!     means an unterminated string literal.

use crate::cml::diagnostics::{codes, Diagnostic};
use crate::cml::token::{Token, TokenStream};
use logos::Logos;

/// Tokenize CML source into a token stream with byte ranges
///
/// Stops at the first lexical error and reports it as a syntax diagnostic.
pub fn tokenize(source: &str) -> Result<TokenStream, Diagnostic> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(token) => tokens.push((token, span)),
            Err(()) => {
                let rest = &source[span.start..];
                let message = if rest.starts_with('"') {
                    "Unterminated string literal".to_string()
                } else {
                    match rest.chars().next() {
                        Some(c) => format!("Unexpected character '{}'", c),
                        None => "Unexpected end of input".to_string(),
                    }
                };
                tracing::debug!(offset = span.start, %message, "lexing failed");
                return Err(Diagnostic::error(message)
                    .with_code(codes::SYNTAX)
                    .at_span(source, &span));
            }
        }
    }

    tracing::trace!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}
