// Copyright (c) 2019-2026 The Lumen Authors.
// Licensed under the MIT License. See LICENSE.md for details.

use itertools::Itertools as _;
use lumen_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{simple_node_impl, Expression};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CallExpression {
    pub function: Box<Expression>,
    pub arguments: Vec<Expression>,
    pub span: Span,
}

simple_node_impl!(CallExpression);

impl fmt::Display for CallExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({})", self.function, self.arguments.iter().join(", "))
    }
}
