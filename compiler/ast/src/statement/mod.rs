// Copyright (c) 2019-2026 The Lumen Authors.
// Licensed under the MIT License. See LICENSE.md for details.

mod block;
mod expression_statement;
mod let_;
mod return_;

pub use block::*;
pub use expression_statement::*;
pub use let_::*;
pub use return_::*;

use crate::Node;
use lumen_span::Span;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every shape a statement can take: `let`, `return`, a bare expression, or
/// the block form used by function bodies and `if`/`else` branches.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
    Block(BlockStatement),
}

impl Node for Statement {
    fn span(&self) -> Span {
        match self {
            Statement::Let(n) => n.span(),
            Statement::Return(n) => n.span(),
            Statement::Expression(n) => n.span(),
            Statement::Block(n) => n.span(),
        }
    }

    fn set_span(&mut self, span: Span) {
        match self {
            Statement::Let(n) => n.set_span(span),
            Statement::Return(n) => n.set_span(span),
            Statement::Expression(n) => n.set_span(span),
            Statement::Block(n) => n.set_span(span),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Statement::Let(n) => write!(f, "{n}"),
            Statement::Return(n) => write!(f, "{n}"),
            Statement::Expression(n) => write!(f, "{n}"),
            Statement::Block(n) => write!(f, "{n}"),
        }
    }
}
