// Copyright (c) 2019-2026 The Lumen Authors.
// Licensed under the MIT License. See LICENSE.md for details.

use lumen_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{simple_node_impl, Expression};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReturnStatement {
    pub value: Expression,
    pub span: Span,
}

simple_node_impl!(ReturnStatement);

impl fmt::Display for ReturnStatement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "return {};", self.value)
    }
}
