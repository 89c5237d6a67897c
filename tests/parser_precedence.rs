// Copyright (c) 2019-2026 The Lumen Authors.
// Licensed under the MIT License. See LICENSE.md for details.

//! Parser-level properties: canonical re-printed forms pin down operator
//! precedence and the binding power of calls/indexing.

use lumen_errors::Handler;
use lumen_parser::parse;

fn reprint(source: &str) -> String {
    let handler = Handler::new();
    let program = parse(&handler, source);
    assert!(!handler.has_errors(), "unexpected parser errors for {source:?}");
    program.to_string()
}

#[test]
fn unary_minus_binds_tighter_than_multiplication() {
    assert_eq!(reprint("-a * b"), "((-a) * b)");
}

#[test]
fn bang_and_minus_compose() {
    assert_eq!(reprint("!-a"), "(!(-a))");
}

#[test]
fn arithmetic_precedence_chain() {
    assert_eq!(reprint("a + b * c + d / e - f"), "(((a + (b * c)) + (d / e)) - f)");
}

#[test]
fn equality_binds_loosest_among_these() {
    assert_eq!(reprint("3 + 4 * 5 == 3 * 1 + 4 * 5"), "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))");
}

#[test]
fn calls_and_indexing_bind_tighter_than_arithmetic() {
    assert_eq!(reprint("a + add(b * c) + d"), "((a + add((b * c))) + d)");
    assert_eq!(reprint("a * [1, 2, 3, 4][b * c] * d"), "((a * ([1, 2, 3, 4][(b * c)])) * d)");
}

#[test]
fn grouped_expressions_override_precedence() {
    assert_eq!(reprint("(5 + 5) * 2"), "((5 + 5) * 2)");
    assert_eq!(reprint("!(true == true)"), "(!(true == true))");
}
