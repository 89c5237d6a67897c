// Copyright (c) 2019-2026 The Lumen Authors.
// Licensed under the MIT License. See LICENSE.md for details.

use lumen_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{simple_node_impl, BlockStatement, Expression};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IfExpression {
    pub condition: Box<Expression>,
    pub consequence: BlockStatement,
    pub alternative: Option<BlockStatement>,
    pub span: Span,
}

simple_node_impl!(IfExpression);

impl fmt::Display for IfExpression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "if{} {{ {} }}", self.condition, self.consequence)?;
        if let Some(alternative) = &self.alternative {
            write!(f, " else {{ {alternative} }}")?;
        }
        Ok(())
    }
}
