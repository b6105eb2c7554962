//! Conversion of grammar errors into diagnostics

use chumsky::error::SimpleReason;

use super::combinators::ParserError;
use crate::cml::diagnostics::{codes, Diagnostic};
use crate::cml::token::Token;

fn describe_expected(expected: &Option<Token>) -> String {
    match expected {
        None => "end of input".to_string(),
        Some(Token::Ident(s)) if s.is_empty() => "identifier".to_string(),
        Some(Token::Str(s)) if s.is_empty() => "string".to_string(),
        Some(Token::RelationshipKeyword(s)) if s.is_empty() => "relationship keyword".to_string(),
        Some(token) => format!("'{}'", token),
    }
}

/// Convert a grammar error into a syntax diagnostic located in `source`
pub(crate) fn to_diagnostic(error: &ParserError, source: &str) -> Diagnostic {
    let message = match error.reason() {
        SimpleReason::Unclosed { delimiter, .. } => {
            format!("Unclosed delimiter {}", delimiter.describe())
        }
        SimpleReason::Custom(message) => message.clone(),
        SimpleReason::Unexpected => match error.found() {
            Some(token) => format!("Unexpected {}", token.describe()),
            None => "Unexpected end of input".to_string(),
        },
    };

    let mut expected: Vec<String> = error.expected().map(describe_expected).collect();
    expected.sort();
    expected.dedup();
    if expected.is_empty() {
        if let Some(label) = error.label() {
            expected.push(label.to_string());
        }
    }

    Diagnostic::error(message)
        .with_code(codes::SYNTAX)
        .with_expected(expected)
        .at_span(source, &error.span())
}

/// Pick the first error by position
pub(crate) fn first_error(errors: Vec<ParserError>) -> Option<ParserError> {
    errors.into_iter().min_by_key(|e| e.span().start)
}
