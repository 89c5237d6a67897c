// Copyright (c) 2019-2026 The Lumen Authors.
// Licensed under the MIT License. See LICENSE.md for details.

//! Lexer and Pratt parser for the Lumen scripting language.
//!
//! [`parse`] is the crate's single entry point: it tokenizes source text and
//! hands the stream to the Pratt parser, accumulating diagnostics into a
//! [`lumen_errors::Handler`] rather than raising — the parser never aborts
//! on a malformed statement.

pub mod parser;
pub mod tokenizer;

pub use parser::parse;
pub use tokenizer::{Lexer, SpannedToken, Token};
