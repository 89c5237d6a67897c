// Copyright (c) 2019-2026 The Lumen Authors.
// Licensed under the MIT License. See LICENSE.md for details.

use itertools::Itertools as _;
use lumen_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{simple_node_impl, BlockStatement, Identifier};

/// An anonymous function value, e.g. `fn(x, y) { x + y }`.
///
/// Lumen has no named top-level function declarations: binding a function
/// literal to a name is just `let add = fn(x, y) { x + y };` — functions are
/// values like any other, not a distinct declaration form.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FunctionLiteral {
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
    pub span: Span,
}

simple_node_impl!(FunctionLiteral);

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "fn({}) {{ {} }}", self.parameters.iter().join(", "), self.body)
    }
}
