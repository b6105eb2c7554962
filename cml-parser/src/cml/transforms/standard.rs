//! Prebuilt pipelines
//!
//! All pipelines are statics, built on first use and shared afterwards.

use once_cell::sync::Lazy;

use crate::cml::ast::SyntaxTree;
use crate::cml::building::{BuildOptions, BuildOutput};
use crate::cml::token::TokenStream;
use crate::cml::transforms::stages::{Building, ParsedSource, Parsing, Tokenization};
use crate::cml::transforms::Transform;

pub type TokenTransform = Transform<String, TokenStream>;
pub type TreeTransform = Transform<String, SyntaxTree>;
pub type ModelTransform = Transform<String, BuildOutput>;

/// String → tokens
pub static TOKENIZATION: Lazy<TokenTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then(Tokenization::new()));

/// String → syntax tree
pub static TO_TREE: Lazy<TreeTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then(Parsing::new())
        .then(Transform::from_fn(|parsed: ParsedSource| Ok(parsed.tree)))
});

/// String → built model, with default options
pub static STRING_TO_MODEL: Lazy<ModelTransform> =
    Lazy::new(|| model_pipeline(BuildOptions::default()));

/// String → built model, with the given options
pub fn model_pipeline(options: BuildOptions) -> ModelTransform {
    Transform::from_fn(Ok)
        .then(Parsing::new())
        .then(Building::new(options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenization() {
        let tokens = TOKENIZATION.run("ContextMap {}".to_string()).unwrap();
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_to_tree() {
        let tree = TO_TREE
            .run("Domain D { Subdomain S }\nUseCase U".to_string())
            .unwrap();
        assert_eq!(tree.elements.len(), 2);
    }

    #[test]
    fn test_string_to_model() {
        let output = STRING_TO_MODEL
            .run("BoundedContext A implements S\nDomain D { Subdomain S }".to_string())
            .unwrap();

        assert!(output.diagnostics.is_empty());
        assert_eq!(output.model.contexts[0].implements.len(), 1);
    }

    #[test]
    fn test_pipelines_fail_on_syntax_errors() {
        assert!(STRING_TO_MODEL.run("ContextMap { invalid".to_string()).is_err());
        assert!(TO_TREE.run("}".to_string()).is_err());
    }
}
