//! Tokenization stage: source text to tokens

use crate::cml::lexing::tokenize;
use crate::cml::token::TokenStream;
use crate::cml::transforms::{Runnable, TransformError};

#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenization;

impl Tokenization {
    pub fn new() -> Self {
        Tokenization
    }
}

impl Runnable<String, TokenStream> for Tokenization {
    fn run(&self, input: String) -> Result<TokenStream, TransformError> {
        Ok(tokenize(&input)?)
    }
}

impl Runnable<&str, TokenStream> for Tokenization {
    fn run(&self, input: &str) -> Result<TokenStream, TransformError> {
        Ok(tokenize(input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cml::token::Token;

    #[test]
    fn test_tokens_keep_source_ranges() {
        let source = "BoundedContext Claims";
        let tokens = Tokenization::new().run(source).unwrap();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].0, Token::Ident("Claims".into()));
        assert_eq!(&source[tokens[1].1.clone()], "Claims");
    }

    #[test]
    fn test_lexer_error_becomes_diagnostic() {
        let err = Tokenization::new().run("Domain \"open".to_string()).unwrap_err();
        assert!(matches!(err, TransformError::Diagnostic(d) if d.line == Some(1)));
    }
}
