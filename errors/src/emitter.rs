// Copyright (c) 2019-2026 The Lumen Authors.
// Licensed under the MIT License. See LICENSE.md for details.

use std::cell::RefCell;

use colored::Colorize;

use crate::ParserError;

/// Side channel the parser emits diagnostics into: a parser holds a
/// `&Handler` rather than threading `Result` through every call, so a single
/// malformed statement doesn't abort the whole parse.
#[derive(Default)]
pub struct Handler {
    errors: RefCell<Vec<ParserError>>,
}

impl Handler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `err` and keeps going; the caller decides whether or how to
    /// recover the cursor position.
    pub fn emit_err(&self, err: ParserError) {
        self.errors.borrow_mut().push(err);
    }

    pub fn err_count(&self) -> usize {
        self.errors.borrow().len()
    }

    pub fn has_errors(&self) -> bool {
        self.err_count() > 0
    }

    /// Drains the accumulated diagnostics in emission order.
    pub fn extract_errors(self) -> Vec<ParserError> {
        self.errors.into_inner()
    }
}

/// Renders a batch of parser diagnostics the way the REPL's error banner
/// does: one bold red `error:` line per diagnostic.
pub fn render_errors(errors: &[ParserError]) -> String {
    errors.iter().map(|err| format!("{} {err}", "error:".red().bold())).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_span::Span;

    #[test]
    fn handler_accumulates_in_emission_order() {
        let handler = Handler::new();
        handler.emit_err(ParserError::no_prefix_parse_fn("+", Span::dummy()));
        handler.emit_err(ParserError::invalid_integer_literal("99999999999999999999", Span::dummy()));

        assert_eq!(handler.err_count(), 2);
        assert!(handler.has_errors());

        let errors = handler.extract_errors();
        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], ParserError::NoPrefixParseFn { .. }));
        assert!(matches!(errors[1], ParserError::InvalidIntegerLiteral { .. }));
    }

    #[test]
    fn fresh_handler_has_no_errors() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        assert_eq!(handler.err_count(), 0);
    }
}
