// Copyright (c) 2019-2026 The Lumen Authors.
// Licensed under the MIT License. See LICENSE.md for details.

use lumen_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::simple_node_impl;

/// A double-quoted string literal. No escape processing: the lexer copies
/// the bytes between the quotes verbatim into `value`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StringLiteral {
    pub value: String,
    pub span: Span,
}

simple_node_impl!(StringLiteral);

impl fmt::Display for StringLiteral {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
