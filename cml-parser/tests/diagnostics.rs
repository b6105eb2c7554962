//! Diagnostics as callers see them: rendered, located and attached to the right file

use cml_parser::cml::building::{BuildOptions, DuplicatePolicy, ReferencePolicy};
use cml_parser::cml::diagnostics::{codes, Severity};
use cml_parser::cml::testing::Sample;
use cml_parser::{parse_file, parse_file_safe, CmlError, CmlLoader};

fn rendered(source: &str, options: BuildOptions) -> Vec<String> {
    let result = CmlLoader::from_string(source)
        .with_filename("model.cml")
        .with_options(options)
        .parse_safe();
    result
        .errors
        .iter()
        .chain(&result.warnings)
        .map(|d| d.pretty())
        .collect()
}

#[test]
fn test_unknown_subdomain_type_warning() {
    let result = Sample::Domains.parse_safe();

    insta::assert_snapshot!(
        result.warnings[0].pretty(),
        @"[domains.cml:13:9] Unknown type 'LOGISTICS' for subdomain 'Shipping'; using GENERIC_SUBDOMAIN"
    );
    assert_eq!(result.warnings[0].severity, Severity::Warning);
}

#[test]
fn test_unresolved_reference_warning() {
    let lines = rendered(
        "BoundedContext A implements Missing",
        BuildOptions::default(),
    );

    insta::assert_snapshot!(
        lines.join("\n"),
        @"[model.cml:1:29] Unresolved subdomain 'Missing' in bounded context 'A'"
    );
}

#[test]
fn test_columns_count_characters() {
    let lines = rendered(
        "BoundedContext Zürich implements Missing",
        BuildOptions::default(),
    );

    insta::assert_snapshot!(
        lines.join("\n"),
        @"[model.cml:1:34] Unresolved subdomain 'Missing' in bounded context 'Zürich'"
    );
}

#[test]
fn test_unresolved_references_in_map() {
    let lines = rendered(
        "BoundedContext A\nContextMap M {\n  contains A, Ghost\n  A -> Phantom\n}",
        BuildOptions::default(),
    );

    assert_eq!(
        lines,
        vec![
            "[model.cml:3:15] Unresolved bounded context 'Ghost' in context map 'M'",
            "[model.cml:4:8] Unresolved relationship endpoint 'Phantom' in context map 'M'",
        ]
    );
}

#[test]
fn test_duplicate_name_warning() {
    let lines = rendered(
        "UseCase Checkout\nUseCase Checkout",
        BuildOptions::default(),
    );

    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("[model.cml:2:1] Duplicate use case 'Checkout'"));
}

#[test]
fn test_strict_options_turn_findings_into_errors() {
    let source = "BoundedContext A implements Missing\nBoundedContext A";

    let lenient = CmlLoader::from_string(source).parse_safe();
    assert!(lenient.ok());
    assert_eq!(lenient.warnings.len(), 2);

    let strict = CmlLoader::from_string(source)
        .with_options(BuildOptions::strict())
        .parse_safe();
    assert!(!strict.ok());
    assert!(strict.model.is_none());
    let found: Vec<_> = strict
        .errors
        .iter()
        .filter_map(|d| d.code.as_deref())
        .collect();
    assert_eq!(found, vec![codes::DUPLICATE_NAME, codes::UNRESOLVED_REFERENCE]);
}

#[test]
fn test_policies_are_independent() {
    let source = "BoundedContext A implements Missing\nBoundedContext A";
    let options = BuildOptions::new()
        .with_references(ReferencePolicy::Warn)
        .with_duplicates(DuplicatePolicy::Reject);

    let result = CmlLoader::from_string(source)
        .with_options(options)
        .parse_safe();
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(
        result.errors[0].code.as_deref(),
        Some(codes::DUPLICATE_NAME)
    );
}

#[test]
fn test_unterminated_map_from_file() {
    let path = Sample::UnterminatedMap.path();

    let result = parse_file_safe(&path);
    assert!(!result.ok());
    assert!(result.model.is_none());
    assert_eq!(result.errors.len(), 1);

    let error = &result.errors[0];
    assert_eq!(error.message, "Unexpected end of input");
    assert_eq!(error.code.as_deref(), Some(codes::SYNTAX));
    assert!(error.line.is_some());
    assert!(error
        .filename
        .as_deref()
        .is_some_and(|f| f.ends_with("unterminated-map.cml")));

    match parse_file(&path) {
        Err(CmlError::Syntax(diagnostic)) => assert_eq!(diagnostic.message, error.message),
        other => panic!("expected a syntax error, got {:?}", other),
    }
}

#[test]
fn test_syntax_error_context_marks_the_line() {
    let result = CmlLoader::from_string("BoundedContext A {\n  type = FEATURE\n}\n}\n").parse_safe();
    let error = &result.errors[0];

    assert_eq!((error.line, error.col), (Some(4), Some(1)));
    let context = error.context.as_deref().unwrap();
    assert!(context.contains(">>   4 | }"), "{}", context);
    assert!(context.contains("     2 |   type = FEATURE"), "{}", context);
}
