// Copyright (c) 2019-2026 The Lumen Authors.
// Licensed under the MIT License. See LICENSE.md for details.

//! Library surface for embedding Lumen: parse and evaluate a source string
//! or file against a caller-supplied (or fresh) environment.
//!
//! This is the thin glue the REPL binary (`src/main.rs`) and the
//! integration test suite (`tests/`) both sit on top of — tokenizing and
//! parsing is [`lumen_parser::parse`], evaluation is [`lumen_eval::eval_program`];
//! this crate just wires the two together and turns a non-empty parser
//! [`Handler`] into a result the caller can act on instead of a `Program`.

use std::cell::RefCell;
use std::io;
use std::path::Path;
use std::rc::Rc;

use lumen_errors::{Handler, ParserError};
use lumen_object::{Environment, Value};

/// Either an evaluated [`Value`] or the list of diagnostics the parser
/// accumulated while trying to parse the source. The parser never raises,
/// so a non-empty diagnostic list is the only failure mode this surface has
/// to represent.
pub enum Outcome {
    Value(Value),
    ParseErrors(Vec<ParserError>),
}

/// A fresh top-level environment, the same shape the REPL keeps alive
/// across lines: a REPL session retains one environment for its whole
/// lifetime.
pub fn new_environment() -> Rc<RefCell<Environment>> {
    Environment::new()
}

/// Parses and evaluates `source` against `env`. `env` is mutated in place by
/// any `let` statements in `source`, so calling this repeatedly against the
/// same environment is what gives a REPL session persistent bindings.
pub fn run_source(source: &str, env: &Rc<RefCell<Environment>>) -> Outcome {
    let handler = Handler::new();
    let program = lumen_parser::parse(&handler, source);
    if handler.has_errors() {
        tracing::debug!(count = handler.err_count(), "parse failed");
        return Outcome::ParseErrors(handler.extract_errors());
    }
    tracing::trace!("parse succeeded, evaluating");
    Outcome::Value(lumen_eval::eval_program(&program, env))
}

/// Reads `path`, then behaves like [`run_source`]. A host-side CLI
/// convenience — the language itself has no file-I/O surface.
pub fn run_file(path: impl AsRef<Path>, env: &Rc<RefCell<Environment>>) -> io::Result<Outcome> {
    let source = std::fs::read_to_string(path)?;
    Ok(run_source(&source, env))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_source_persists_bindings_across_calls() {
        let env = new_environment();
        assert!(matches!(run_source("let a = 5;", &env), Outcome::Value(_)));
        match run_source("a + 1;", &env) {
            Outcome::Value(value) => assert_eq!(value.inspect(), "6"),
            Outcome::ParseErrors(errors) => panic!("unexpected parse errors: {errors:?}"),
        }
    }

    #[test]
    fn run_source_surfaces_parser_errors_without_evaluating() {
        let env = new_environment();
        match run_source("let = 5;", &env) {
            Outcome::ParseErrors(errors) => assert!(!errors.is_empty()),
            Outcome::Value(value) => panic!("expected parse errors, got {value:?}"),
        }
    }
}
