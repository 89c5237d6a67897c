// Copyright (c) 2019-2026 The Lumen Authors.
// Licensed under the MIT License. See LICENSE.md for details.

use lumen_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::simple_node_impl;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BooleanLiteral {
    pub value: bool,
    pub span: Span,
}

simple_node_impl!(BooleanLiteral);

impl fmt::Display for BooleanLiteral {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
