// Copyright (c) 2019-2026 The Lumen Authors.
// Licensed under the MIT License. See LICENSE.md for details.

use lumen_span::Span;

/// Common behavior of every AST node: knowing where it came from.
///
/// Nodes here carry no `NodeID` — there's no multi-pass resolver that needs
/// to key side tables off of node identity, so that field and its plumbing
/// are dropped.
pub trait Node {
    fn span(&self) -> Span;
    fn set_span(&mut self, span: Span);
}

/// Implements [`Node`] for a type with a public `span: Span` field.
#[macro_export]
macro_rules! simple_node_impl {
    ($ty:ty) => {
        impl $crate::Node for $ty {
            fn span(&self) -> lumen_span::Span {
                self.span
            }

            fn set_span(&mut self, span: lumen_span::Span) {
                self.span = span;
            }
        }
    };
}
