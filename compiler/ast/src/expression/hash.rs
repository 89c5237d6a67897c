// Copyright (c) 2019-2026 The Lumen Authors.
// Licensed under the MIT License. See LICENSE.md for details.

use itertools::Itertools as _;
use lumen_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{simple_node_impl, Expression};

/// A `{key: value, ...}` literal. Pairs keep source order so that
/// re-printing is deterministic.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HashLiteral {
    pub pairs: Vec<(Expression, Expression)>,
    pub span: Span,
}

simple_node_impl!(HashLiteral);

impl fmt::Display for HashLiteral {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{}}}", self.pairs.iter().map(|(k, v)| format!("{k}: {v}")).join(", "))
    }
}
