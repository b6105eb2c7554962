//! Core token types shared across the lexer, parser, and tooling.

pub mod core;

pub use core::Token;

/// A token paired with the byte range of its source text
pub type SpannedToken = (Token, std::ops::Range<usize>);

/// Type alias for token stream (to satisfy clippy::type_complexity)
pub type TokenStream = Vec<SpannedToken>;
