// Copyright (c) 2019-2026 The Lumen Authors.
// Licensed under the MIT License. See LICENSE.md for details.

mod lexer;
mod token;

pub use lexer::Lexer;
pub use token::Token;

use lumen_span::Span;
use std::fmt;

/// A token plus the span of source text it was scanned from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
}

impl SpannedToken {
    pub const fn dummy() -> Self {
        Self { token: Token::Eof, span: Span::dummy() }
    }
}

impl fmt::Display for SpannedToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.token)
    }
}
