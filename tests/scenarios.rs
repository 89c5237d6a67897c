// Copyright (c) 2019-2026 The Lumen Authors.
// Licensed under the MIT License. See LICENSE.md for details.

//! End-to-end scenarios: literal source in, literal `Inspect()` rendering
//! out.

use lumen::{new_environment, run_source, Outcome};

fn inspect(source: &str) -> String {
    let env = new_environment();
    match run_source(source, &env) {
        Outcome::Value(value) => value.inspect(),
        Outcome::ParseErrors(errors) => panic!("unexpected parser errors for {source:?}: {errors:?}"),
    }
}

#[test]
fn let_bindings_chain_through_arithmetic() {
    assert_eq!(inspect("let a = 5; let b = a; let c = a + b + 5; c;"), "15");
}

#[test]
fn nested_if_return_stops_at_the_program_boundary() {
    assert_eq!(inspect("if (10 > 1) { if (10 > 1) { return 10; } return 1; }"), "10");
}

#[test]
fn closures_capture_their_defining_scope() {
    let source = "let newAdder = fn(x) { fn(y) { x + y } }; let addTwo = newAdder(2); addTwo(2);";
    assert_eq!(inspect(source), "4");
}

#[test]
fn len_builtin_over_strings_and_its_arity_error() {
    assert_eq!(inspect(r#"len("four")"#), "4");
    assert_eq!(inspect("len(1)"), "ERROR: Invalid argument passed to `len()`. Got=INTEGER");
}

#[test]
fn string_subtraction_is_an_unknown_operator() {
    assert_eq!(inspect(r#""Hello" - "world""#), "ERROR: unknown operator: STRING - STRING");
}

#[test]
fn push_builtin_does_not_mutate_the_original_array() {
    let env = new_environment();
    assert!(matches!(run_source("let a = [1, 2, 3];", &env), Outcome::Value(_)));
    match run_source("push(a, 4);", &env) {
        Outcome::Value(value) => assert_eq!(value.inspect(), "[1, 2, 3, 4]"),
        Outcome::ParseErrors(errors) => panic!("unexpected parser errors: {errors:?}"),
    }
    match run_source("a;", &env) {
        Outcome::Value(value) => assert_eq!(value.inspect(), "[1, 2, 3]"),
        Outcome::ParseErrors(errors) => panic!("unexpected parser errors: {errors:?}"),
    }
}

#[test]
fn hash_indexing_and_unhashable_key_error() {
    assert_eq!(inspect(r#"{"one": 1, "two": 2}["one"]"#), "1");
    assert_eq!(inspect("{}[fn(x) { x }]"), "ERROR: Unusable as hash key: FUNCTION");
}

#[test]
fn identifier_not_found_has_the_pinned_message_prefix() {
    let rendered = inspect("foobar");
    assert!(rendered.starts_with("ERROR: identifier not found: "));
}

#[test]
fn type_mismatch_and_unknown_operator_prefixes() {
    assert!(inspect("5 + true;").starts_with("ERROR: type mismatch: "));
    assert!(inspect("-true").starts_with("ERROR: unknown operator: "));
}

#[test]
fn evaluation_is_deterministic_for_error_free_programs() {
    let source = "let fib = fn(n) { if (n < 2) { n } else { fib(n - 1) + fib(n - 2) } }; fib(10);";
    assert_eq!(inspect(source), inspect(source));
}
