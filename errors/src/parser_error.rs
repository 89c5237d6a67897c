// Copyright (c) 2019-2026 The Lumen Authors.
// Licensed under the MIT License. See LICENSE.md for details.

use lumen_span::Span;
use thiserror::Error;

/// Every diagnostic shape the parser can emit, one variant per message
/// template in the language's error discipline. Display wording is pinned
/// exactly to what the reference implementation prints, since the REPL and
/// the test suite both depend on those exact strings.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParserError {
    #[error("expected next token to be {expected}, got {got} instead")]
    UnexpectedToken { expected: String, got: String, span: Span },

    #[error("No prefix parse function for {kind}")]
    NoPrefixParseFn { kind: String, span: Span },

    #[error("could not parse {literal} as integer")]
    InvalidIntegerLiteral { literal: String, span: Span },
}

impl ParserError {
    pub fn span(&self) -> Span {
        match self {
            ParserError::UnexpectedToken { span, .. } => *span,
            ParserError::NoPrefixParseFn { span, .. } => *span,
            ParserError::InvalidIntegerLiteral { span, .. } => *span,
        }
    }

    pub fn unexpected_token(expected: impl Into<String>, got: impl Into<String>, span: Span) -> Self {
        ParserError::UnexpectedToken { expected: expected.into(), got: got.into(), span }
    }

    pub fn no_prefix_parse_fn(kind: impl Into<String>, span: Span) -> Self {
        ParserError::NoPrefixParseFn { kind: kind.into(), span }
    }

    pub fn invalid_integer_literal(literal: impl Into<String>, span: Span) -> Self {
        ParserError::InvalidIntegerLiteral { literal: literal.into(), span }
    }
}

pub type Result<T> = std::result::Result<T, ParserError>;
