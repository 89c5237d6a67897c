// Copyright (c) 2019-2026 The Lumen Authors.
// Licensed under the MIT License. See LICENSE.md for details.

//! The Pratt parser: a two-token lookahead window over a pre-scanned token
//! stream, dispatching to prefix/infix handlers keyed by token kind.

mod context;
pub(crate) mod expression;
pub(crate) mod precedence;
mod statement;

pub use context::ParserContext;
pub use precedence::Precedence;

use lumen_ast::Program;
use lumen_errors::Handler;

use crate::tokenizer::Lexer;

/// Tokenizes `source` and parses it into a [`Program`]. Parser diagnostics
/// are accumulated into `handler`; a non-empty handler means the returned
/// program is only a partial, best-effort AST.
pub fn parse(handler: &Handler, source: &str) -> Program {
    tracing::trace!(bytes = source.len(), "tokenizing source");
    let tokens = Lexer::new(source).tokenize();
    tracing::trace!(tokens = tokens.len(), "parsing token stream");
    let program = statement::parse_program(handler, tokens);
    if handler.has_errors() {
        tracing::debug!(count = handler.err_count(), "parse finished with errors");
    }
    program
}
