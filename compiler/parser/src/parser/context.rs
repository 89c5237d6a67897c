// Copyright (c) 2019-2026 The Lumen Authors.
// Licensed under the MIT License. See LICENSE.md for details.

use std::mem;

use lumen_errors::{Handler, ParserError};
use lumen_span::Span;

use crate::tokenizer::{SpannedToken, Token};

/// Parser state: a two-token lookahead window (`cur_token`/`peek_token`)
/// over a pre-scanned token stream, plus a side-channel [`Handler`] for
/// diagnostics, with `bump`/`check`/`eat`/`expect` primitives over that
/// window and `cur`/`peek` naming for the two tracked tokens.
pub struct ParserContext<'a> {
    pub(crate) handler: &'a Handler,
    tokens: Vec<SpannedToken>,
    pos: usize,
    pub(crate) cur_token: SpannedToken,
    pub(crate) peek_token: SpannedToken,
}

impl<'a> ParserContext<'a> {
    pub fn new(handler: &'a Handler, tokens: Vec<SpannedToken>) -> Self {
        let mut ctx = Self {
            handler,
            tokens,
            pos: 0,
            cur_token: SpannedToken::dummy(),
            peek_token: SpannedToken::dummy(),
        };
        // Two bumps to prime both cur_token and peek_token from the dummy
        // seed above.
        ctx.bump();
        ctx.bump();
        ctx
    }

    fn next_raw(&mut self) -> SpannedToken {
        match self.tokens.get(self.pos) {
            Some(tok) => {
                self.pos += 1;
                tok.clone()
            }
            None => SpannedToken { token: Token::Eof, span: self.peek_token.span },
        }
    }

    /// Advances the window by one token: `peek_token` becomes `cur_token`,
    /// and a fresh token is scanned in behind it.
    pub fn bump(&mut self) {
        let next = self.next_raw();
        self.cur_token = mem::replace(&mut self.peek_token, next);
    }

    pub fn cur_token_is(&self, token: &Token) -> bool {
        &self.cur_token.token == token
    }

    pub fn peek_token_is(&self, token: &Token) -> bool {
        &self.peek_token.token == token
    }

    pub fn has_next(&self) -> bool {
        !matches!(self.cur_token.token, Token::Eof)
    }

    /// If `peek_token` is `token`, consumes it and returns `true`. Otherwise
    /// emits `"expected next token to be <token>, got <actual> instead"`
    /// and leaves the cursor in place.
    pub fn expect_peek(&mut self, token: &Token) -> bool {
        if self.peek_token_is(token) {
            self.bump();
            true
        } else {
            self.peek_error(token);
            false
        }
    }

    pub(crate) fn peek_error(&self, expected: &Token) {
        self.emit_err(ParserError::unexpected_token(expected.to_string(), self.peek_token.token.to_string(), self.peek_token.span));
    }

    pub(crate) fn emit_err(&self, err: ParserError) {
        self.handler.emit_err(err);
    }

    pub(crate) fn cur_span(&self) -> Span {
        self.cur_token.span
    }
}
