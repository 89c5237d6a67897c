// Copyright (c) 2019-2026 The Lumen Authors.
// Licensed under the MIT License. See LICENSE.md for details.

use lumen_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{simple_node_impl, Expression};

/// A bare expression used as a statement, e.g. `5 + 5;` typed at the REPL.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExpressionStatement {
    pub expression: Expression,
    pub span: Span,
}

simple_node_impl!(ExpressionStatement);

impl fmt::Display for ExpressionStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}
