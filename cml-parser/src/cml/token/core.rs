//! Token definitions for the CML format
//!
//! The tokens are defined using the logos derive macro. Whitespace and comments are skipped
//! by the lexer; everything else, including punctuation that only appears inside domain object
//! bodies, becomes a token so the grammar can tolerate bodies it does not interpret.

use logos::{Lexer, Logos};
use std::fmt;

/// All possible tokens in a CML source file
#[derive(Logos, Debug, Clone, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
#[logos(skip r"/\*[^*]*\*+([^/*][^*]*\*+)*/")]
pub enum Token {
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,
    #[token("=")]
    Equals,
    #[token(":")]
    Colon,

    // Relationship connectors
    #[token("->")]
    ArrowRight,
    #[token("<-")]
    ArrowLeft,
    #[token("<->")]
    ArrowBoth,
    #[regex(
        "Shared-Kernel|Customer-Supplier|Upstream-Downstream|Downstream-Upstream|Partnership",
        |lex| lex.slice().to_string(),
        priority = 10
    )]
    RelationshipKeyword(String),

    // Declaration keywords are plain identifiers; the grammar matches them by text.
    #[regex(r"[\p{L}_][\p{L}\p{N}_]*", |lex| lex.slice().to_string())]
    Ident(String),
    #[regex(r#""([^"\\]|\\.)*""#, unescape)]
    Str(String),
    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().to_string())]
    Number(String),

    // Any other single punctuation character (`-`, `<`, `>`, `(`, `;`, `@`, ...)
    #[regex(r#"[^\s\p{L}0-9_{}\[\],=:"]"#, |lex| lex.slice().chars().next(), priority = 0)]
    Symbol(char),
}

fn unescape(lex: &mut Lexer<Token>) -> String {
    let raw = lex.slice();
    let inner = &raw[1..raw.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

impl Token {
    /// Check if this token is the identifier `keyword`
    pub fn is_keyword(&self, keyword: &str) -> bool {
        matches!(self, Token::Ident(s) if s == keyword)
    }

    /// Check if this token can open or close a block
    pub fn is_brace(&self) -> bool {
        matches!(self, Token::LBrace | Token::RBrace)
    }

    /// Human readable description used in diagnostics
    pub fn describe(&self) -> String {
        match self {
            Token::Ident(s) => format!("identifier '{}'", s),
            Token::Str(s) => format!("string \"{}\"", s),
            Token::Number(n) => format!("number {}", n),
            Token::RelationshipKeyword(k) => format!("relationship keyword '{}'", k),
            other => format!("'{}'", other),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LBrace => write!(f, "{{"),
            Token::RBrace => write!(f, "}}"),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
            Token::Comma => write!(f, ","),
            Token::Equals => write!(f, "="),
            Token::Colon => write!(f, ":"),
            Token::ArrowRight => write!(f, "->"),
            Token::ArrowLeft => write!(f, "<-"),
            Token::ArrowBoth => write!(f, "<->"),
            Token::RelationshipKeyword(k) => write!(f, "{}", k),
            Token::Ident(s) => write!(f, "{}", s),
            Token::Str(s) => write!(f, "\"{}\"", s),
            Token::Number(n) => write!(f, "{}", n),
            Token::Symbol(c) => write!(f, "{}", c),
        }
    }
}
